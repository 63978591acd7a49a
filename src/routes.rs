//! Top-level router combining the JSON API and the chart route.
//!
//! # Route Structure
//!
//! - `GET  /`, `GET /health`   - Liveness and readiness
//! - `POST /track`             - Pageview ingestion
//! - `GET  /analytics/*`       - JSON analytics
//! - `GET  /analytics/by-site/svg` - SVG chart
//!
//! # Middleware
//!
//! - **Panic recovery** - Handler panics become a logged 500
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, so beacons can be posted from tracked sites
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with every route and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::public_routes())
        .merge(web::routes::public_routes())
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
        .layer(CorsLayer::permissive())
}

/// [`router`] wrapped so that `/analytics/summary/` matches `/analytics/summary`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
