//! Error types and their HTTP mapping.
//!
//! Internal failures ([`AppError`]) never reach the client with detail.
//! Handlers convert them into an [`ApiError`], which logs the cause and
//! answers `500 Internal Server Error` with a fixed message for the
//! operation family.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::message::MessageResponse;

/// Failure inside the service or the data store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("chart rendering failed: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("chart template failed: {0}")]
    Template(#[from] askama::Error),

    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),
}

/// Fixed message returned when ingestion fails.
pub const TRACKING_FAILED: &str = "Tracking failed";

/// Fixed message returned when an analytics query fails.
pub const ANALYTICS_FAILED: &str = "Failed to fetch analytics";

/// Fixed message returned when chart rendering fails.
pub const CHART_FAILED: &str = "Failed to generate chart";

/// Client-facing error: always a 500 with a generic message.
#[derive(Debug)]
pub struct ApiError {
    message: &'static str,
}

impl ApiError {
    fn log(context: &'static str, message: &'static str, error: &AppError) -> Self {
        tracing::error!(error = %error, context, "{message}");
        Self { message }
    }

    /// Logs an ingestion failure.
    pub fn tracking(error: AppError) -> Self {
        Self::log("track", TRACKING_FAILED, &error)
    }

    /// Logs an analytics query failure.
    pub fn analytics(error: AppError) -> Self {
        Self::log("analytics", ANALYTICS_FAILED, &error)
    }

    /// Logs a chart rendering failure.
    pub fn chart(error: AppError) -> Self {
        Self::log("chart", CHART_FAILED, &error)
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse::new(self.message)),
        )
            .into_response()
    }
}
