//! Axum router configuration with middleware.
//!
//! The only route is the liveness probe. It carries no application state:
//! the chat shell lives entirely in the terminal client.
//! Middleware: CORS, tracing.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gctchat_types::health::HealthStatus;

/// Build the router with all routes and middleware.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// GET /healthz - always `200 {"status":"ok"}`.
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
