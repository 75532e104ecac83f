// Static site route definitions

use std::path::{Path, PathBuf};

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::state::AppState;

/// Creates router serving the intake form at `/` and its assets under
/// `/static`. Responses carry their own content types and bypass the JSON
/// envelope.
pub fn site_routes(static_dir: &str) -> Router<AppState> {
    let index: PathBuf = Path::new(static_dir).join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .nest_service("/static", ServeDir::new(static_dir))
}
