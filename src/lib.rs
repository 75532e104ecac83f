// Library root for the relaunch.ai failure-analysis API

pub mod agents;
pub mod api;
pub mod config;
pub mod core;
pub mod llm;
pub mod services;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
