// HTTP surface: JSON API for the page plus static assets.

pub mod api;
pub mod assets;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::Response,
    routing::{get, post},
};

use crate::portfolio::Catalog;
use crate::stats::StatsHook;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub hook: Arc<StatsHook>,
    pub catalog: Arc<Catalog>,
    pub dist_dir: Arc<PathBuf>,
}

/// Create the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/github", get(api::github_stats))
        .route("/api/github/refresh", post(api::refresh_github_stats))
        .route("/api/projects", get(api::projects))
        .route("/", get(index))
        .route("/*path", get(asset))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Response {
    assets::serve(&state.dist_dir, "/").await
}

async fn asset(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    assets::serve(&state.dist_dir, &path).await
}
