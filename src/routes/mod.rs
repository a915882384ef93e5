//! HTTP route handlers.
//!
//! Three small groups: the root HTML page, the `/api` color endpoint, and the
//! orchestration probes. Every response carries `Cache-Control: no-store` so
//! probe outcomes and pod identity are never served stale by an intermediary.
//!
//! Request tracing is provided by tower-http's `TraceLayer`, giving one span
//! per request with method, path, and status.

pub mod api;
pub mod health;
pub mod root;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::state::AppState;

/// Creates the Axum router with all routes, cache headers, and tracing.
pub fn create_router(state: AppState) -> Router {
    // Probes - always fresh, liveness/readiness decisions must reach the
    // orchestrator unmodified
    let probe_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/up", get(health::startup));

    // Pages - root HTML view and the color API
    let page_routes = Router::new()
        .route("/", get(root::index))
        .route("/api", get(api::color));

    Router::new()
        .merge(probe_routes)
        .merge(page_routes)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
