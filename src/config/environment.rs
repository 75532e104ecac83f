// Environment configuration, loaded once at startup with zero-copy defaults.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 600; // a full remote pipeline run takes minutes
const DEFAULT_ORG_ID: &str = "59f3dce8-2dcf-4a7f-b6ff-d2cbce1231dc";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_STATIC_DIR: &str = "static";

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub client_id: Cow<'static, str>,
    pub client_secret: Cow<'static, str>,
    pub org_id: Cow<'static, str>,
    pub log_dir: Cow<'static, str>,
    pub static_dir: Cow<'static, str>,
}

impl EnvironmentVariables {
    // * Loads environment variables once.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars().chain(dotenv::vars()).collect();

        // * A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        // * Build our EnvironmentVariables, providing defaults if missing
        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            // ? PaaS targets inject PORT; an empty value means "use the default"
            port: get_var("PORT")
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            // ? Empty Deploy AI credentials switch the model gateway to offline mode
            client_id: get_var("CLIENT_ID")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed("")),

            client_secret: get_var("CLIENT_SECRET")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed("")),

            org_id: get_var("ORG_ID")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_ORG_ID)),

            log_dir: get_var("LOG_DIR")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_LOG_DIR)),

            static_dir: get_var("STATIC_DIR")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_STATIC_DIR)),
        })
    }
}
