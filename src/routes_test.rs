use super::*;

use std::collections::HashMap;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

fn config(pairs: &[(&str, &str)]) -> HostConfig {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
}

async fn get_path(router: Router, path: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================
// Host page
// =============================================================

#[tokio::test]
async fn index_embeds_widget_tag_with_configured_attributes() {
    let router = app(&config(&[("WIDGET_TITLE", "Support desk"), ("WIDGET_SUBTITLE", "Online now")]));
    let (status, body) = get_path(router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.to_ascii_lowercase().starts_with("<!doctype html>"));
    assert!(body.contains("<agodify-chatbot"));
    assert!(body.contains("Support desk"));
    assert!(body.contains("Online now"));
    assert!(body.contains("/pkg/chat_widget.js"));
    assert!(!body.contains("restore-state"));
}

#[tokio::test]
async fn index_marks_restore_state_when_enabled() {
    let router = app(&config(&[("WIDGET_RESTORE_STATE", "true")]));
    let (_, body) = get_path(router, "/").await;
    assert!(body.contains("restore-state"));
}

// =============================================================
// Health and fallbacks
// =============================================================

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = get_path(app(&config(&[])), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get_path(app(&config(&[])), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let router = app(&config(&[("WIDGET_PKG_DIR", "does/not/exist")]));
    let (status, _) = get_path(router, "/pkg/chat_widget.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
