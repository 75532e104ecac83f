// Configuration: environment variables and shared application state.

pub mod environment;
pub mod state;
