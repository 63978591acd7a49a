//! Repository trait for pageview storage and analytics queries.

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::filter::VisitFilter;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Visit count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DailyVisits {
    pub date: NaiveDate,
    pub visits: i64,
}

/// Visit count for one site.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SiteVisits {
    pub site: Option<String>,
    pub visits: i64,
}

/// Visit count for one page.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PageVisits {
    pub page: Option<String>,
    pub visits: i64,
}

/// Headline counts over a filtered window.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct VisitSummary {
    pub total_visits: i64,
    pub total_sites: i64,
    pub total_pages: i64,
    pub unique_visitors: i64,
}

/// Repository interface for pageview events.
///
/// One method per analytics operation. Every query windows rows to the
/// trailing `filter.days` relative to the data store's current time, and
/// returns an empty result rather than an error when nothing matches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Stores one pageview. `id` and `created_at` are assigned on insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Daily counts in ascending date order. Days without visits are absent.
    ///
    /// Honours `days` and `site`.
    async fn visits_over_time(&self, filter: VisitFilter) -> Result<Vec<DailyVisits>, AppError>;

    /// Per-site counts, unordered. Honours `days` only.
    async fn visits_by_site(&self, filter: VisitFilter) -> Result<Vec<SiteVisits>, AppError>;

    /// Per-page counts in descending order, at most `limit` rows.
    ///
    /// Honours `days`, `site` and `limit`.
    async fn top_pages(&self, filter: VisitFilter) -> Result<Vec<PageVisits>, AppError>;

    /// Individual visits, newest first.
    ///
    /// Honours every field of the filter.
    async fn list_visits(&self, filter: VisitFilter) -> Result<Vec<Visit>, AppError>;

    /// Headline counts. Honours `days` and `site`.
    async fn summary(&self, filter: VisitFilter) -> Result<VisitSummary, AppError>;

    /// Round-trips a trivial query to check connectivity.
    async fn ping(&self) -> Result<(), AppError>;
}
