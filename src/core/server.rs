// Application server configuration and setup

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    error_handling::HandleErrorLayer, extract::DefaultBodyLimit, http::Method,
    middleware::from_fn, Router,
};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::api::analysis::analysis_routes;
use crate::api::monitoring::monitoring_routes;
use crate::api::site::site_routes;
use crate::config::environment::EnvironmentVariables;
use crate::config::state::AppState;
use crate::utils::{error_handler::handle_global_error, response_handler::response_wrapper};

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let env: &Arc<EnvironmentVariables> = &state.environment;

    Router::new()
        .merge(analysis_routes())
        .merge(monitoring_routes())
        .merge(site_routes(&env.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer())
                .layer(from_fn(response_wrapper))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    env.default_timeout_seconds,
                )))
                .layer(DefaultBodyLimit::max(env.max_request_body_size)),
        )
        .with_state(state.clone())
}

/// The intake form may be hosted anywhere, so cross-origin browser
/// requests are allowed from any origin (without credentials).
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
