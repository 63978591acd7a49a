//! Handlers for the aggregate and listing endpoints.
//!
//! Every handler answers a JSON array (or object for the summary) and maps
//! any failure to 500 `{"message": "Failed to fetch analytics"}`, including
//! a query string that cannot be read at all (for example a repeated key).

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::analytics::{
    DailyVisitsItem, PageVisitsItem, SiteVisitsItem, SiteWindowParams, SummaryResponse,
    TopPagesParams, VisitItem, VisitsParams, WindowParams,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Daily visit counts, oldest day first.
///
/// # Endpoint
///
/// `GET /analytics/visits-over-time`
///
/// # Query Parameters
///
/// - `days` (optional): trailing window in days (default: 30, unbounded)
/// - `site` (optional): exact site match
pub async fn visits_over_time_handler(
    State(state): State<AppState>,
    params: Result<Query<SiteWindowParams>, QueryRejection>,
) -> Result<Json<Vec<DailyVisitsItem>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::analytics(e.into()))?;

    let rows = state
        .analytics_service
        .visits_over_time(params.into_filter())
        .await
        .map_err(ApiError::analytics)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Visit counts per site.
///
/// # Endpoint
///
/// `GET /analytics/by-site`
///
/// # Query Parameters
///
/// - `days` (optional): trailing window in days (default: 30)
pub async fn by_site_handler(
    State(state): State<AppState>,
    params: Result<Query<WindowParams>, QueryRejection>,
) -> Result<Json<Vec<SiteVisitsItem>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::analytics(e.into()))?;

    let rows = state
        .analytics_service
        .visits_by_site(params.days())
        .await
        .map_err(ApiError::analytics)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Most visited pages, busiest first.
///
/// # Endpoint
///
/// `GET /analytics/top-pages`
///
/// # Query Parameters
///
/// - `days` (optional): trailing window in days (default: 30)
/// - `site` (optional): exact site match
/// - `limit` (optional): row count, clamped to 1..=1000 (default: 10)
pub async fn top_pages_handler(
    State(state): State<AppState>,
    params: Result<Query<TopPagesParams>, QueryRejection>,
) -> Result<Json<Vec<PageVisitsItem>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::analytics(e.into()))?;

    let rows = state
        .analytics_service
        .top_pages(params.into_filter())
        .await
        .map_err(ApiError::analytics)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Raw visits, newest first.
///
/// # Endpoint
///
/// `GET /analytics/visits`
///
/// # Query Parameters
///
/// - `days` (optional): trailing window in days (default: 30)
/// - `site` (optional): exact site match
/// - `page` (optional): exact page match
/// - `limit` (optional): page size, clamped to 1..=1000 (default: 100)
/// - `offset` (optional): rows to skip, at least 0 (default: 0)
pub async fn visits_handler(
    State(state): State<AppState>,
    params: Result<Query<VisitsParams>, QueryRejection>,
) -> Result<Json<Vec<VisitItem>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::analytics(e.into()))?;

    let rows = state
        .analytics_service
        .list_visits(params.into_filter())
        .await
        .map_err(ApiError::analytics)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Headline counts for the window.
///
/// # Endpoint
///
/// `GET /analytics/summary`
///
/// # Query Parameters
///
/// - `days` (optional): trailing window in days (default: 30)
/// - `site` (optional): exact site match
///
/// # Response
///
/// ```json
/// { "total_visits": 4, "total_sites": 2, "total_pages": 2, "unique_visitors": 3 }
/// ```
pub async fn summary_handler(
    State(state): State<AppState>,
    params: Result<Query<SiteWindowParams>, QueryRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::analytics(e.into()))?;

    let summary = state
        .analytics_service
        .summary(params.into_filter())
        .await
        .map_err(ApiError::analytics)?;

    Ok(Json(summary.into()))
}
