//! API route configuration.

use crate::api::handlers::{
    by_site_handler, health_handler, root_handler, summary_handler, top_pages_handler,
    track_handler, visits_handler, visits_over_time_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Ingestion and JSON analytics routes. No authentication.
///
/// # Endpoints
///
/// - `GET  /`                             - Liveness message
/// - `GET  /health`                       - Readiness with database check
/// - `POST /track`                        - Record a pageview
/// - `GET  /analytics/visits-over-time`   - Daily counts
/// - `GET  /analytics/by-site`            - Per-site counts
/// - `GET  /analytics/top-pages`          - Most visited pages
/// - `GET  /analytics/visits`             - Raw listing
/// - `GET  /analytics/summary`            - Headline counts
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/track", post(track_handler))
        .route("/analytics/visits-over-time", get(visits_over_time_handler))
        .route("/analytics/by-site", get(by_site_handler))
        .route("/analytics/top-pages", get(top_pages_handler))
        .route("/analytics/visits", get(visits_handler))
        .route("/analytics/summary", get(summary_handler))
}
