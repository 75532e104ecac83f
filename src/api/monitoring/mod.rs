// Monitoring endpoints.

pub mod handler;
pub mod routes;

pub use routes::monitoring_routes;
