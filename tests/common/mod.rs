#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use site_analytics::domain::entities::{NewVisit, Visit};
use site_analytics::domain::filter::VisitFilter;
use site_analytics::domain::repositories::{
    DailyVisits, PageVisits, SiteVisits, VisitRepository, VisitSummary,
};
use site_analytics::error::AppError;
use site_analytics::infrastructure::persistence::PgVisitRepository;
use site_analytics::routes::router;
use site_analytics::state::AppState;
use sqlx::PgPool;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// `VisitRepository` over a vector, for handler tests without PostgreSQL.
#[derive(Default)]
pub struct InMemoryVisitRepository {
    visits: Mutex<Vec<Visit>>,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row with an explicit timestamp.
    pub fn insert_at(&self, site: &str, page: &str, ip: &str, created_at: DateTime<Utc>) {
        let mut visits = self.visits.lock().unwrap();
        let id = visits.len() as i64 + 1;
        visits.push(Visit {
            id,
            site: Some(site.to_string()),
            page: Some(page.to_string()),
            referrer: None,
            user_agent: None,
            ip_address: Some(ip.to_string()),
            screen: None,
            created_at,
        });
    }

    pub fn insert(&self, site: &str, page: &str, ip: &str) {
        self.insert_at(site, page, ip, Utc::now());
    }

    pub fn all(&self) -> Vec<Visit> {
        self.visits.lock().unwrap().clone()
    }

    fn windowed(&self, filter: &VisitFilter) -> Vec<Visit> {
        let since = Utc::now() - Duration::days(filter.days);
        self.visits
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.created_at >= since)
            .cloned()
            .collect()
    }
}

fn matches(value: &Option<String>, wanted: &Option<String>) -> bool {
    wanted.is_none() || value == wanted
}

fn distinct(rows: &[Visit], field: fn(&Visit) -> &Option<String>) -> i64 {
    rows.iter()
        .filter_map(|v| field(v).as_ref())
        .collect::<HashSet<_>>()
        .len() as i64
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn record_visit(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let mut visits = self.visits.lock().unwrap();
        let visit = Visit {
            id: visits.len() as i64 + 1,
            site: new_visit.site,
            page: new_visit.page,
            referrer: new_visit.referrer,
            user_agent: new_visit.user_agent,
            ip_address: new_visit.ip_address,
            screen: new_visit.screen,
            created_at: Utc::now(),
        };
        visits.push(visit.clone());
        Ok(visit)
    }

    async fn visits_over_time(&self, filter: VisitFilter) -> Result<Vec<DailyVisits>, AppError> {
        let mut days: BTreeMap<_, i64> = BTreeMap::new();
        for v in self
            .windowed(&filter)
            .iter()
            .filter(|v| matches(&v.site, &filter.site))
        {
            *days.entry(v.created_at.date_naive()).or_default() += 1;
        }
        Ok(days
            .into_iter()
            .map(|(date, visits)| DailyVisits { date, visits })
            .collect())
    }

    async fn visits_by_site(&self, filter: VisitFilter) -> Result<Vec<SiteVisits>, AppError> {
        let mut sites: HashMap<Option<String>, i64> = HashMap::new();
        for v in self.windowed(&filter) {
            *sites.entry(v.site).or_default() += 1;
        }
        Ok(sites
            .into_iter()
            .map(|(site, visits)| SiteVisits { site, visits })
            .collect())
    }

    async fn top_pages(&self, filter: VisitFilter) -> Result<Vec<PageVisits>, AppError> {
        let mut pages: HashMap<Option<String>, i64> = HashMap::new();
        for v in self
            .windowed(&filter)
            .into_iter()
            .filter(|v| matches(&v.site, &filter.site))
        {
            *pages.entry(v.page).or_default() += 1;
        }
        let mut rows: Vec<PageVisits> = pages
            .into_iter()
            .map(|(page, visits)| PageVisits { page, visits })
            .collect();
        rows.sort_by(|a, b| b.visits.cmp(&a.visits));
        rows.truncate(filter.limit as usize);
        Ok(rows)
    }

    async fn list_visits(&self, filter: VisitFilter) -> Result<Vec<Visit>, AppError> {
        let mut rows: Vec<Visit> = self
            .windowed(&filter)
            .into_iter()
            .filter(|v| matches(&v.site, &filter.site) && matches(&v.page, &filter.page))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn summary(&self, filter: VisitFilter) -> Result<VisitSummary, AppError> {
        let rows: Vec<Visit> = self
            .windowed(&filter)
            .into_iter()
            .filter(|v| matches(&v.site, &filter.site))
            .collect();

        Ok(VisitSummary {
            total_visits: rows.len() as i64,
            total_sites: distinct(&rows, |v| &v.site),
            total_pages: distinct(&rows, |v| &v.page),
            unique_visitors: distinct(&rows, |v| &v.ip_address),
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingVisitRepository;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl VisitRepository for FailingVisitRepository {
    async fn record_visit(&self, _new_visit: NewVisit) -> Result<Visit, AppError> {
        Err(unavailable())
    }

    async fn visits_over_time(&self, _filter: VisitFilter) -> Result<Vec<DailyVisits>, AppError> {
        Err(unavailable())
    }

    async fn visits_by_site(&self, _filter: VisitFilter) -> Result<Vec<SiteVisits>, AppError> {
        Err(unavailable())
    }

    async fn top_pages(&self, _filter: VisitFilter) -> Result<Vec<PageVisits>, AppError> {
        Err(unavailable())
    }

    async fn list_visits(&self, _filter: VisitFilter) -> Result<Vec<Visit>, AppError> {
        Err(unavailable())
    }

    async fn summary(&self, _filter: VisitFilter) -> Result<VisitSummary, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

/// Router over an in-memory store; the store handle is returned for seeding.
pub fn create_test_app() -> (Router, Arc<InMemoryVisitRepository>) {
    let repository = Arc::new(InMemoryVisitRepository::new());
    let state = AppState::new(repository.clone());
    (router(state), repository)
}

/// Router over the PostgreSQL repository of a `#[sqlx::test]` pool.
pub fn create_pg_app(pool: PgPool) -> Router {
    router(AppState::new(Arc::new(PgVisitRepository::new(Arc::new(pool)))))
}

/// Router whose data store is down.
pub fn create_failing_app() -> Router {
    router(AppState::new(Arc::new(FailingVisitRepository)))
}

/// Seeds the scenario: site "a" has three visits to "/x", site "b" one to "/y".
pub fn seed_two_sites(repository: &InMemoryVisitRepository) {
    repository.insert("a", "/x", "10.0.0.1");
    repository.insert("a", "/x", "10.0.0.2");
    repository.insert("a", "/x", "10.0.0.1");
    repository.insert("b", "/y", "10.0.0.3");
}

/// Inserts a row directly, optionally backdated by `age_days`.
pub async fn create_test_visit(pool: &PgPool, site: &str, page: &str, ip: &str, age_days: i32) {
    sqlx::query(
        "INSERT INTO site_visits (site, page, ip_address, created_at) \
         VALUES ($1, $2, $3, NOW() - make_interval(days => $4))",
    )
    .bind(site)
    .bind(page)
    .bind(ip)
    .bind(age_days)
    .execute(pool)
    .await
    .unwrap();
}
