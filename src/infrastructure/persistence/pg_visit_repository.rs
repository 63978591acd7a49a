//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::visit_query::{INSERT_VISIT, VisitQuery};
use crate::domain::entities::{NewVisit, Visit};
use crate::domain::filter::VisitFilter;
use crate::domain::repositories::{
    DailyVisits, PageVisits, SiteVisits, VisitRepository, VisitSummary,
};
use crate::error::AppError;

/// PostgreSQL repository for pageview ingestion and analytics.
///
/// Queries are composed at runtime by [`VisitQuery`] and executed against
/// the shared connection pool.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let visit = sqlx::query_as::<_, Visit>(INSERT_VISIT)
            .bind(new_visit.site)
            .bind(new_visit.page)
            .bind(new_visit.referrer)
            .bind(new_visit.user_agent)
            .bind(new_visit.ip_address)
            .bind(new_visit.screen)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(visit)
    }

    async fn visits_over_time(&self, filter: VisitFilter) -> Result<Vec<DailyVisits>, AppError> {
        let mut qb = VisitQuery::VisitsOverTime.build(&filter);
        let rows = qb
            .build_query_as::<DailyVisits>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn visits_by_site(&self, filter: VisitFilter) -> Result<Vec<SiteVisits>, AppError> {
        let mut qb = VisitQuery::VisitsBySite.build(&filter);
        let rows = qb
            .build_query_as::<SiteVisits>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn top_pages(&self, filter: VisitFilter) -> Result<Vec<PageVisits>, AppError> {
        let mut qb = VisitQuery::TopPages.build(&filter);
        let rows = qb
            .build_query_as::<PageVisits>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn list_visits(&self, filter: VisitFilter) -> Result<Vec<Visit>, AppError> {
        let mut qb = VisitQuery::ListVisits.build(&filter);
        let rows = qb
            .build_query_as::<Visit>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }

    async fn summary(&self, filter: VisitFilter) -> Result<VisitSummary, AppError> {
        let mut qb = VisitQuery::Summary.build(&filter);
        let summary = qb
            .build_query_as::<VisitSummary>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(summary)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
