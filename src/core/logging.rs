// Tracing setup: pretty stdout output plus a JSON file sink

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "relaunch_api.json";

/// Initializes the tracing subscriber with a human-readable stdout layer
/// and a JSON layer appending to `{log_dir}/relaunch_api.json`.
pub fn init_tracing(log_dir: &str) -> Result<()> {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "relaunch_api=info,tower_http=debug,axum=trace".parse().unwrap());

    let log_file: File = open_log_file(log_dir)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_span_events(FmtSpan::FULL))
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}

/// Creates the log directory if missing and opens the sink in append mode.
fn open_log_file(log_dir: &str) -> Result<File> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Could not create log directory '{log_dir}'"))?;

    let path: PathBuf = PathBuf::from(log_dir).join(LOG_FILE_NAME);

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file '{}'", path.display()))
}
