// The intake form frontend and its assets.

pub mod routes;

pub use routes::site_routes;
