// Shared utilities: error mapping, the response envelope, JSON and text helpers.

pub mod error_handler;
pub mod json;
pub mod response_handler;
pub mod text;
