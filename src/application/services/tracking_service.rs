//! Pageview ingestion service.

use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// Records beacon events.
///
/// Payload fields are stored as received. Nothing is validated or
/// normalised; missing fields end up as `NULL`.
pub struct TrackingService {
    repository: Arc<dyn VisitRepository>,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self { repository }
    }

    /// Stores one pageview and returns the persisted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn track(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        tracing::debug!(
            site = ?new_visit.site,
            page = ?new_visit.page,
            ip = ?new_visit.ip_address,
            "Recording visit"
        );

        self.repository.record_visit(new_visit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockVisitRepository;
    use chrono::Utc;

    fn stored(new_visit: &NewVisit) -> Visit {
        Visit {
            id: 1,
            site: new_visit.site.clone(),
            page: new_visit.page.clone(),
            referrer: new_visit.referrer.clone(),
            user_agent: new_visit.user_agent.clone(),
            ip_address: new_visit.ip_address.clone(),
            screen: new_visit.screen.clone(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_track_passes_payload_through() {
        let mut mock_repo = MockVisitRepository::new();

        mock_repo
            .expect_record_visit()
            .withf(|v| {
                v.site.as_deref() == Some("a")
                    && v.page.as_deref() == Some("/x")
                    && v.ip_address.as_deref() == Some("198.51.100.4")
                    && v.referrer.is_none()
            })
            .times(1)
            .returning(|v| Ok(stored(&v)));

        let service = TrackingService::new(Arc::new(mock_repo));

        let new_visit = NewVisit {
            site: Some("a".to_string()),
            page: Some("/x".to_string()),
            ..Default::default()
        }
        .with_ip_address(Some("198.51.100.4".to_string()));

        let visit = service.track(new_visit).await.unwrap();
        assert_eq!(visit.id, 1);
        assert_eq!(visit.site.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_track_accepts_empty_payload() {
        let mut mock_repo = MockVisitRepository::new();

        mock_repo
            .expect_record_visit()
            .withf(|v| *v == NewVisit::default())
            .times(1)
            .returning(|v| Ok(stored(&v)));

        let service = TrackingService::new(Arc::new(mock_repo));

        assert!(service.track(NewVisit::default()).await.is_ok());
    }

    #[tokio::test]
    async fn test_track_propagates_database_error() {
        let mut mock_repo = MockVisitRepository::new();

        mock_repo
            .expect_record_visit()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let service = TrackingService::new(Arc::new(mock_repo));

        let result = service.track(NewVisit::default()).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
