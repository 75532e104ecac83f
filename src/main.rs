// Service entry point: configuration, logging, then the Axum server

use anyhow::Result;
use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use relaunch_api::core::logging::init_tracing;
use relaunch_api::core::server::{create_app, setup_listener, shutdown_signal};
use relaunch_api::{AppState, EnvironmentVariables};

#[tokio::main]
async fn main() -> Result<()> {
    let environment: EnvironmentVariables = EnvironmentVariables::load()?;
    init_tracing(&environment.log_dir)?;

    let state: AppState = AppState::new(environment);
    let app: Router = create_app(state.clone());

    let listener: TcpListener = setup_listener(&state.environment).await?;

    if let Ok(instance) = hostname::get() {
        info!("Instance {} ready", instance.to_string_lossy());
    }
    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
