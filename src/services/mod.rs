// Long-lived services owned by the application state.

pub mod report_cache;
