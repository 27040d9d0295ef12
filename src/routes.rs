//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered demo page at `/`, the compiled widget bundle
//! under `/pkg`, and a liveness check. The page is rendered once at start-up
//! and shared, since its inputs are fixed for the life of the process.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use chat_widget::app::render_host_page;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

#[derive(Clone)]
struct HostState {
    page: Arc<str>,
}

/// Build the host router.
pub fn app(config: &HostConfig) -> Router {
    let state = HostState {
        page: Arc::from(render_host_page(config.page_options())),
    };

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<HostState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
