//! Handler for the visits-by-site chart.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::analytics::WindowParams;
use crate::error::ApiError;
use crate::state::AppState;
use crate::web::chart;

/// Renders visits per site as an SVG spline chart.
///
/// # Endpoint
///
/// `GET /analytics/by-site/svg`
///
/// # Query Parameters
///
/// - `days` (optional): trailing window in days (default: 30)
///
/// # Response
///
/// `image/svg+xml`. Sites are placed in a random order on every request.
/// Without data the response is a fixed "No data available" image.
///
/// # Errors
///
/// Returns 500 `{"message": "Failed to generate chart"}` as JSON when the
/// query or the rendering fails.
pub async fn by_site_chart_handler(
    State(state): State<AppState>,
    params: Result<Query<WindowParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::chart(e.into()))?;

    let rows = state
        .analytics_service
        .visits_by_site(params.days())
        .await
        .map_err(ApiError::chart)?;

    let svg = chart::render_shuffled(rows, &mut rand::rng()).map_err(ApiError::chart)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}
