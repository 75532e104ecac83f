// Application state shared across handlers

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::llm::LlmGateway;
use crate::services::report_cache::ReportCache;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub llm: LlmGateway,
    pub reports: ReportCache,
}

impl AppState {
    /// Builds the shared state from an already-loaded configuration.
    pub fn new(environment: EnvironmentVariables) -> Self {
        let environment: Arc<EnvironmentVariables> = Arc::new(environment);
        let llm: LlmGateway = LlmGateway::from_environment(&environment);
        let reports: ReportCache = ReportCache::new();

        Self {
            environment,
            llm,
            reports,
        }
    }
}
