//! Handler for pageview ingestion.

use axum::{Json, body::Bytes, extract::State};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::track::TrackRequest;
use crate::domain::entities::NewVisit;
use crate::error::ApiError;
use crate::state::AppState;
use crate::utils::client_ip::ClientIp;

/// Records one pageview beacon.
///
/// # Endpoint
///
/// `POST /track`
///
/// # Request Body
///
/// ```json
/// {
///   "site": "blog.example.com",
///   "page": "/posts/1",
///   "referrer": "https://example.org/",
///   "userAgent": "Mozilla/5.0 ...",
///   "screen": "1440x900"
/// }
/// ```
///
/// All fields are optional and stored without validation. The body is read
/// as JSON whatever the `Content-Type`, since `navigator.sendBeacon` posts
/// `text/plain`.
///
/// # Client Address
///
/// First entry of `X-Forwarded-For`, else the socket peer address.
///
/// # Errors
///
/// Returns 500 `{"message": "Tracking failed"}` if the insert fails.
pub async fn track_handler(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let new_visit = NewVisit::from(TrackRequest::from_body(&body)).with_ip_address(ip);

    state
        .tracking_service
        .track(new_visit)
        .await
        .map_err(ApiError::tracking)?;

    Ok(Json(MessageResponse::new("Tracked")))
}
