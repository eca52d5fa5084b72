// Web server: Axum-based JSON API for a single front-end.
//
// Routes:
//   GET  /api/health           liveness check
//   GET  /api/channel?url=     channel overview with recent videos
//   POST /api/analyze          score caller-supplied channel metrics
//   GET  /api/channel/analyze  fetch a channel and score it in one call
//
// The channel source and the clock are injected through AppState, so tests
// can drive the router with stubs.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::scoring::Clock;
use crate::source::ChannelSource;

pub mod error;
pub mod handlers;

pub use error::ApiError;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ChannelSource>,
    pub clock: Arc<dyn Clock>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("channelscope API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/channel", get(handlers::channel::get_channel))
        .route(
            "/api/channel/analyze",
            get(handlers::analyze::analyze_channel),
        )
        .route("/api/analyze", post(handlers::analyze::analyze_metrics))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}
