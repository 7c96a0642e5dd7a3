//! Integration tests for the VillagePulse web server

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use villagepulse::config::VillagePulseConfig;
use villagepulse::web::{self, AppState};

fn test_router() -> axum::Router {
    let config = VillagePulseConfig::default();
    let state = AppState::from_config(&config).expect("state should build without an API key");
    web::router(state, &config.server.static_dir)
}

/// The root path serves the bundled index page with a success status
#[tokio::test]
async fn test_root_serves_index_page() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("VillagePulse"));
}

/// Same-directory files resolve by name
#[tokio::test]
async fn test_named_static_file_is_served() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/index.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Unknown paths fall through to the standard not-found behavior
#[tokio::test]
async fn test_missing_file_is_not_found() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent.file")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
