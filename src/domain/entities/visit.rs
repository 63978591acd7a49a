//! Visit entity representing a single pageview beacon.

use chrono::{DateTime, Utc};

/// A stored pageview event.
///
/// Every field except `id` and `created_at` is passed through from the
/// beacon payload (or derived from the request) without validation, so any
/// of them may be missing.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Visit {
    pub id: i64,
    pub site: Option<String>,
    pub page: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub screen: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a new visit.
///
/// `id` and `created_at` are assigned by the data store on insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewVisit {
    pub site: Option<String>,
    pub page: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub screen: Option<String>,
}

impl NewVisit {
    /// Attaches the client address derived from the request.
    pub fn with_ip_address(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }
}
