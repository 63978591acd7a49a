//! Liveness and readiness handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::message::MessageResponse;
use crate::state::AppState;

/// Liveness check.
///
/// # Endpoint
///
/// `GET /`
///
/// Always answers `{"message": "Tracking server running"}` without touching
/// the database.
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Tracking server running"))
}

/// Readiness check with a database round-trip.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: database check failed
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match state.analytics_service.check_database().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some("Database unreachable".to_string()),
            }
        }
    };

    let healthy = database.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
