// Process bootstrap: tracing setup and HTTP server assembly.

pub mod logging;
pub mod server;
