// Analysis endpoints: run the pipeline, preview the generated landing page.

pub mod handler;
pub mod routes;

pub use routes::analysis_routes;
