// JSON endpoints read by the portfolio page.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::portfolio::{Category, DEFAULT_PER_PAGE, Difficulty, ProjectFilter, ProjectPage};
use crate::stats::StatsView;

use super::AppState;

/// Current sidebar state.
pub async fn github_stats(State(state): State<AppState>) -> Json<StatsView> {
    Json(state.hook.view())
}

/// Drop cached GitHub data and fetch it again.
pub async fn refresh_github_stats(State(state): State<AppState>) -> Json<StatsView> {
    Json(state.hook.refresh().await)
}

/// Query string for the project grid.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsQuery {
    pub page: Option<u32>,
    pub per_page: Option<usize>,
    pub category: Option<Category>,
    pub technology: Option<String>,
    pub difficulty: Option<Difficulty>,
}

/// One page of the filtered project grid.
pub async fn projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Json<ProjectPage> {
    let filter = ProjectFilter {
        category: query.category,
        technology: query.technology.filter(|t| !t.trim().is_empty()),
        difficulty: query.difficulty,
    };

    Json(state.catalog.page(
        &filter,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(DEFAULT_PER_PAGE),
    ))
}
