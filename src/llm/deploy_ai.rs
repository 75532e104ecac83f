// HTTP client for the Deploy AI completion service.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::environment::EnvironmentVariables;

const AUTH_URL: &str = "https://api-auth.deploy.ai/oauth2/token";
const API_URL: &str = "https://core-api.deploy.ai";
const CHAT_AGENT_ID: &str = "GPT_4O";

// Token exchange and chat creation are quick; the completion itself is not.
const SETUP_TIMEOUT: Duration = Duration::from_secs(15);
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Client-credentials flow against Deploy AI: fetch a token, open a chat,
/// post one message carrying both prompt roles, read the reply back.
#[derive(Debug, Clone)]
pub struct DeployAiClient {
    http: Client,
    auth_url: String,
    api_url: String,
    client_id: String,
    client_secret: String,
    org_id: String,
}

impl DeployAiClient {
    pub fn new(
        auth_url: impl Into<String>,
        api_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        org_id: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            auth_url: auth_url.into(),
            api_url: api_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            org_id: org_id.into(),
        }
    }

    pub fn from_environment(env: &EnvironmentVariables) -> Self {
        Self::new(
            AUTH_URL,
            API_URL,
            env.client_id.as_ref(),
            env.client_secret.as_ref(),
            env.org_id.as_ref(),
        )
    }

    /// Exchanges client credentials for a bearer token.
    async fn fetch_token(&self) -> Result<String> {
        let response: Value = self
            .http
            .post(&self.auth_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .timeout(SETUP_TIMEOUT)
            .send()
            .await
            .context("token request failed")?
            .error_for_status()
            .context("token endpoint rejected the credentials")?
            .json()
            .await
            .context("token response was not JSON")?;

        let token: &str = response
            .get("access_token")
            .and_then(Value::as_str)
            .context("token response carried no access_token")?;

        Ok(token.to_string())
    }

    /// Runs one completion against a fresh chat.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let token: String = self.fetch_token().await?;

        let chat: Value = self
            .http
            .post(format!("{}/chats", self.api_url))
            .bearer_auth(&token)
            .header("X-Org", &self.org_id)
            .header("accept", "application/json")
            .json(&json!({ "agentId": CHAT_AGENT_ID, "stream": false }))
            .timeout(SETUP_TIMEOUT)
            .send()
            .await
            .context("chat creation request failed")?
            .error_for_status()
            .context("chat creation was rejected")?
            .json()
            .await
            .context("chat response was not JSON")?;

        let chat_id: &str = chat
            .get("id")
            .and_then(Value::as_str)
            .context("chat response carried no id")?;

        let reply: Value = self
            .http
            .post(format!("{}/messages", self.api_url))
            .bearer_auth(&token)
            .header("X-Org", &self.org_id)
            .header("accept", "application/json")
            .json(&json!({
                "chatId": chat_id,
                "stream": false,
                "content": [{
                    "type": "text",
                    "value": format!("SYSTEM:\n{system}\n\nUSER:\n{user}"),
                }],
            }))
            .timeout(COMPLETION_TIMEOUT)
            .send()
            .await
            .context("message request failed")?
            .error_for_status()
            .context("message was rejected")?
            .json()
            .await
            .context("message response was not JSON")?;

        let text: &str = reply
            .pointer("/content/0/value")
            .and_then(Value::as_str)
            .context("message response carried no content")?;

        Ok(text.to_string())
    }
}
