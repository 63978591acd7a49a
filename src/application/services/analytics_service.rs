//! Aggregate and listing queries over stored pageviews.

use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::filter::VisitFilter;
use crate::domain::repositories::{
    DailyVisits, PageVisits, SiteVisits, VisitRepository, VisitSummary,
};
use crate::error::AppError;

/// Service behind the `/analytics/*` endpoints and the admin CLI.
///
/// Each method narrows the filter to the parameters its operation supports
/// before handing it to the repository.
pub struct AnalyticsService {
    repository: Arc<dyn VisitRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self { repository }
    }

    /// Visit counts per calendar day, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn visits_over_time(
        &self,
        filter: VisitFilter,
    ) -> Result<Vec<DailyVisits>, AppError> {
        let filter = VisitFilter::new(filter.days).with_site(filter.site);
        self.repository.visits_over_time(filter).await
    }

    /// Visit counts per site. Only the day window applies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn visits_by_site(&self, days: i64) -> Result<Vec<SiteVisits>, AppError> {
        self.repository.visits_by_site(VisitFilter::new(days)).await
    }

    /// The most visited pages, busiest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn top_pages(&self, filter: VisitFilter) -> Result<Vec<PageVisits>, AppError> {
        let filter = VisitFilter::new(filter.days)
            .with_site(filter.site)
            .with_limit(filter.limit);
        self.repository.top_pages(filter).await
    }

    /// Individual visits, newest first, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_visits(&self, filter: VisitFilter) -> Result<Vec<Visit>, AppError> {
        self.repository.list_visits(filter).await
    }

    /// Headline counts for the window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn summary(&self, filter: VisitFilter) -> Result<VisitSummary, AppError> {
        let filter = VisitFilter::new(filter.days).with_site(filter.site);
        self.repository.summary(filter).await
    }

    /// Checks that the data store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the store is unreachable.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
