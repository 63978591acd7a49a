//! Query parameters and response rows for the `/analytics/*` endpoints.
//!
//! Numeric parameters are parsed leniently with `serde_with`: a value that
//! is absent or does not parse as an integer falls back to the default
//! instead of rejecting the request.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::entities::Visit;
use crate::domain::filter::{
    DEFAULT_DAYS, DEFAULT_TOP_PAGES_LIMIT, DEFAULT_VISITS_LIMIT, VisitFilter,
};
use crate::domain::repositories::{DailyVisits, PageVisits, SiteVisits, VisitSummary};

/// `?days=` only.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct WindowParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub days: Option<i64>,
}

impl WindowParams {
    pub fn days(&self) -> i64 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }
}

/// `?days=&site=` for visits-over-time and summary.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct SiteWindowParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub days: Option<i64>,

    #[serde(default)]
    pub site: Option<String>,
}

impl SiteWindowParams {
    pub fn into_filter(self) -> VisitFilter {
        VisitFilter::new(self.days.unwrap_or(DEFAULT_DAYS)).with_site(self.site)
    }
}

/// `?days=&site=&limit=` for the top-pages ranking.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TopPagesParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub days: Option<i64>,

    #[serde(default)]
    pub site: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl TopPagesParams {
    pub fn into_filter(self) -> VisitFilter {
        VisitFilter::new(self.days.unwrap_or(DEFAULT_DAYS))
            .with_site(self.site)
            .with_limit(self.limit.unwrap_or(DEFAULT_TOP_PAGES_LIMIT))
    }
}

/// `?days=&site=&page=&limit=&offset=` for the raw listing.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct VisitsParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub days: Option<i64>,

    #[serde(default)]
    pub site: Option<String>,

    #[serde(default)]
    pub page: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub offset: Option<i64>,
}

impl VisitsParams {
    pub fn into_filter(self) -> VisitFilter {
        VisitFilter::new(self.days.unwrap_or(DEFAULT_DAYS))
            .with_site(self.site)
            .with_page(self.page)
            .with_limit(self.limit.unwrap_or(DEFAULT_VISITS_LIMIT))
            .with_offset(self.offset.unwrap_or(0))
    }
}

#[derive(Debug, Serialize)]
pub struct DailyVisitsItem {
    pub date: NaiveDate,
    pub visits: i64,
}

impl From<DailyVisits> for DailyVisitsItem {
    fn from(row: DailyVisits) -> Self {
        Self {
            date: row.date,
            visits: row.visits,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SiteVisitsItem {
    pub site: Option<String>,
    pub visits: i64,
}

impl From<SiteVisits> for SiteVisitsItem {
    fn from(row: SiteVisits) -> Self {
        Self {
            site: row.site,
            visits: row.visits,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageVisitsItem {
    pub page: Option<String>,
    pub visits: i64,
}

impl From<PageVisits> for PageVisitsItem {
    fn from(row: PageVisits) -> Self {
        Self {
            page: row.page,
            visits: row.visits,
        }
    }
}

/// One stored visit, with the table's column names.
#[derive(Debug, Serialize)]
pub struct VisitItem {
    pub id: i64,
    pub site: Option<String>,
    pub page: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub screen: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Visit> for VisitItem {
    fn from(visit: Visit) -> Self {
        Self {
            id: visit.id,
            site: visit.site,
            page: visit.page,
            referrer: visit.referrer,
            user_agent: visit.user_agent,
            ip_address: visit.ip_address,
            screen: visit.screen,
            created_at: visit.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_visits: i64,
    pub total_sites: i64,
    pub total_pages: i64,
    pub unique_visitors: i64,
}

impl From<VisitSummary> for SummaryResponse {
    fn from(summary: VisitSummary) -> Self {
        Self {
            total_visits: summary.total_visits,
            total_sites: summary.total_sites,
            total_pages: summary.total_pages,
            unique_visitors: summary.unique_visitors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Query;
    use axum::http::Uri;
    use serde::de::DeserializeOwned;

    fn query<T: DeserializeOwned>(qs: &str) -> T {
        let uri: Uri = format!("/analytics?{qs}").parse().unwrap();
        Query::<T>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_window_defaults() {
        let params: WindowParams = query("");
        assert_eq!(params.days(), 30);
    }

    #[test]
    fn test_non_numeric_days_falls_back() {
        let params: WindowParams = query("days=abc");
        assert_eq!(params.days(), 30);
    }

    #[test]
    fn test_days_is_unbounded() {
        let params: SiteWindowParams = query("days=99999");
        assert_eq!(params.into_filter().days, 99_999);
    }

    #[test]
    fn test_top_pages_limit_defaults_and_clamps() {
        let filter = query::<TopPagesParams>("").into_filter();
        assert_eq!(filter.limit, 10);

        let filter = query::<TopPagesParams>("limit=0").into_filter();
        assert_eq!(filter.limit, 1);

        let filter = query::<TopPagesParams>("limit=5000").into_filter();
        assert_eq!(filter.limit, 1000);

        let filter = query::<TopPagesParams>("limit=abc").into_filter();
        assert_eq!(filter.limit, 10);
    }

    #[test]
    fn test_visits_params_defaults_and_clamps() {
        let filter = query::<VisitsParams>("").into_filter();
        assert_eq!(filter.days, 30);
        assert_eq!(filter.limit, 100);
        assert_eq!(filter.offset, 0);

        let filter = query::<VisitsParams>("offset=-5&limit=abc").into_filter();
        assert_eq!(filter.offset, 0);
        assert_eq!(filter.limit, 100);

        let filter = query::<VisitsParams>("site=a&page=/x&offset=20").into_filter();
        assert_eq!(filter.site.as_deref(), Some("a"));
        assert_eq!(filter.page.as_deref(), Some("/x"));
        assert_eq!(filter.offset, 20);
    }

    #[test]
    fn test_daily_item_serializes_plain_date() {
        let item = DailyVisitsItem {
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            visits: 3,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["date"], "2026-10-19");
        assert_eq!(json["visits"], 3);
    }

    #[test]
    fn test_visit_item_uses_column_names() {
        let item = VisitItem {
            id: 7,
            site: Some("a".to_string()),
            page: Some("/x".to_string()),
            referrer: None,
            user_agent: Some("Mozilla/5.0".to_string()),
            ip_address: Some("10.0.0.1".to_string()),
            screen: Some("1920x1080".to_string()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["user_agent"], "Mozilla/5.0");
        assert_eq!(json["ip_address"], "10.0.0.1");
        assert!(json["referrer"].is_null());
        assert!(json.get("created_at").is_some());
    }
}
