// Model access: remote Deploy AI completions with a deterministic offline fallback.

pub mod deploy_ai;
pub mod mock;

use tracing::{info, warn};

use crate::config::environment::EnvironmentVariables;
use deploy_ai::DeployAiClient;

/// Routes completion requests to Deploy AI when credentials are configured.
/// Without credentials, and on any remote error, the offline generator
/// answers instead so an analysis always completes.
#[derive(Debug, Clone)]
pub struct LlmGateway {
    remote: Option<DeployAiClient>,
}

impl LlmGateway {
    pub fn from_environment(env: &EnvironmentVariables) -> Self {
        if env.client_id.is_empty() || env.client_secret.is_empty() {
            info!("Deploy AI credentials not configured; serving offline completions");
            return Self { remote: None };
        }

        Self {
            remote: Some(DeployAiClient::from_environment(env)),
        }
    }

    /// A gateway that never leaves the process.
    pub fn offline() -> Self {
        Self { remote: None }
    }

    /// Runs one system+user completion.
    pub async fn complete(&self, system: &str, user: &str) -> String {
        match &self.remote {
            Some(client) => match client.complete(system, user).await {
                Ok(reply) => reply,
                Err(err) => {
                    warn!("LLM error: {err:#}");
                    mock::complete(system, user)
                }
            },
            None => mock::complete(system, user),
        }
    }
}
