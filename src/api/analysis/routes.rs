// Analysis route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the analysis endpoints
pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analyse", post(handler::analyse_handler))
        .route("/preview/{startup_name}", get(handler::preview_handler))
}
