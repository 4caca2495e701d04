//! Router tests: JSON API and static asset fallback.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use folio::cache::{MemoryStore, TtlCache};
use folio::portfolio::{Catalog, Project};
use folio::server::{AppState, router};
use folio::stats::{FALLBACK_STATS, LanguageShare, ProfileStats, StatsHook, StatsSource};

struct FixedSource;

#[async_trait]
impl StatsSource for FixedSource {
    async fn fetch_stats(&self) -> ProfileStats {
        ProfileStats {
            total_stars: 77,
            ..FALLBACK_STATS
        }
    }

    async fn fetch_languages(&self) -> Vec<LanguageShare> {
        vec![LanguageShare::new("Rust", 100.0, "#dea584")]
    }
}

fn projects() -> Vec<Project> {
    let json = serde_json::json!([
        {
            "id": "todo", "title": "Todo", "description": "",
            "technologies": ["React"], "category": "Frontend", "difficulty": "Beginner",
            "codeUrl": "https://github.com/someone/todo", "thumbnail": "/t.png",
            "status": "Completed", "features": []
        },
        {
            "id": "api", "title": "API", "description": "",
            "technologies": ["Rust", "Axum"], "category": "API", "difficulty": "Advanced",
            "codeUrl": "https://github.com/someone/api", "thumbnail": "/a.png",
            "status": "In Progress", "features": []
        }
    ]);
    serde_json::from_value(json).unwrap()
}

fn app() -> (TempDir, Router) {
    let dist = TempDir::new().unwrap();
    fs::write(dist.path().join("index.html"), "<html>portfolio</html>").unwrap();
    fs::write(dist.path().join("style.css"), "body {}").unwrap();

    let hook = StatsHook::new(
        Arc::new(FixedSource),
        TtlCache::new(Arc::new(MemoryStore::new())),
    );
    let state = AppState {
        hook: Arc::new(hook),
        catalog: Arc::new(Catalog::new(projects())),
        dist_dir: Arc::new(PathBuf::from(dist.path())),
    };

    (dist, router(state))
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, body.to_vec())
}

async fn get_json(app: Router, method: &str, uri: &str) -> Value {
    let (status, _, body) = send(app, method, uri).await;
    assert_eq!(status, StatusCode::OK, "{} {}", method, uri);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_github_stats_loading_before_activation() {
    let (_dist, app) = app();

    let json = get_json(app, "GET", "/api/github").await;

    assert_eq!(json["isLoading"], true);
    assert!(json["stats"].is_null());
    assert!(json["error"].is_null());
    assert_eq!(json["languages"], serde_json::json!([]));
}

#[tokio::test]
async fn test_refresh_returns_ready_state() {
    let (_dist, app) = app();

    let json = get_json(app.clone(), "POST", "/api/github/refresh").await;
    assert_eq!(json["isLoading"], false);
    assert_eq!(json["stats"]["totalStars"], 77);
    assert_eq!(json["stats"]["totalPRs"], 11);
    assert_eq!(json["languages"][0]["name"], "Rust");

    let json = get_json(app, "GET", "/api/github").await;
    assert_eq!(json["stats"]["totalStars"], 77);
}

#[tokio::test]
async fn test_refresh_requires_post() {
    let (_dist, app) = app();

    let (status, _, _) = send(app, "GET", "/api/github/refresh").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_projects_filtered_and_paged() {
    let (_dist, app) = app();

    let json = get_json(app.clone(), "GET", "/api/projects").await;
    assert_eq!(json["totalItems"], 2);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["pages"], serde_json::json!([]));

    let json = get_json(app.clone(), "GET", "/api/projects?technology=axum").await;
    assert_eq!(json["totalItems"], 1);
    assert_eq!(json["projects"][0]["id"], "api");

    let json = get_json(app.clone(), "GET", "/api/projects?category=API&difficulty=Advanced").await;
    assert_eq!(json["projects"][0]["status"], "In Progress");

    let json = get_json(app, "GET", "/api/projects?perPage=1&page=2").await;
    assert_eq!(json["page"], 2);
    assert_eq!(json["start"], 2);
    assert_eq!(json["end"], 2);
    assert_eq!(json["pages"], serde_json::json!([1, 2]));
}

#[tokio::test]
async fn test_projects_rejects_unknown_category() {
    let (_dist, app) = app();

    let (status, _, _) = send(app, "GET", "/api/projects?category=Poetry").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_assets_and_fallback() {
    let (_dist, app) = app();

    let (status, content_type, body) = send(app.clone(), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html"));
    assert_eq!(body, b"<html>portfolio</html>");

    let (status, content_type, _) = send(app.clone(), "GET", "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));

    let (status, _, body) = send(app.clone(), "GET", "/projects/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>portfolio</html>");

    let (status, _, body) = send(app, "GET", "/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"Not Found");
}

#[tokio::test]
async fn test_encoded_paths_are_decoded() {
    let (dist, app) = app();
    fs::write(dist.path().join("my file.json"), "{}").unwrap();

    let (status, content_type, _) = send(app, "GET", "/my%20file.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
}
