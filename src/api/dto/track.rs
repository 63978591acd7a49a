//! Beacon payload accepted by `POST /track`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::NewVisit;

/// Pageview beacon sent by the tracking snippet.
///
/// Every field is optional and taken as-is. Non-string JSON scalars are kept
/// in their textual form so that nothing the client sends is rejected.
#[derive(Debug, Default, Deserialize)]
pub struct TrackRequest {
    #[serde(default, deserialize_with = "loose_string")]
    pub site: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub page: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub referrer: Option<String>,

    #[serde(default, rename = "userAgent", deserialize_with = "loose_string")]
    pub user_agent: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub screen: Option<String>,
}

impl TrackRequest {
    /// Parses a request body, falling back to an empty payload.
    ///
    /// Beacons are often sent as `text/plain`, so the content type is not
    /// checked; a body that is not a JSON object yields all-`None` fields.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Unparseable beacon body, storing empty visit");
                Self::default()
            }
        }
    }
}

impl From<TrackRequest> for NewVisit {
    fn from(request: TrackRequest) -> Self {
        NewVisit {
            site: request.site,
            page: request.page,
            referrer: request.referrer,
            user_agent: request.user_agent,
            ip_address: None,
            screen: request.screen,
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
