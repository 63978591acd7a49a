//! Chart route configuration.

use crate::state::AppState;
use crate::web::handlers::by_site_chart_handler;
use axum::{Router, routing::get};

/// Image routes.
///
/// # Endpoints
///
/// - `GET /analytics/by-site/svg` - Visits per site as an SVG chart
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/analytics/by-site/svg", get(by_site_chart_handler))
}
