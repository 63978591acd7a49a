//! Query composition for the analytics operations.
//!
//! Each operation is a fixed projection over `site_visits` plus a `WHERE`
//! clause assembled from the optional parts of a [`VisitFilter`]. Every value
//! coming from the caller, including `limit` and `offset`, is a bound
//! parameter; only fixed SQL fragments are pushed as text.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::filter::VisitFilter;

/// Columns returned by the raw listing and by inserts.
pub const VISIT_COLUMNS: &str =
    "id, site, page, referrer, user_agent, ip_address, screen, created_at";

/// Lower bound of the trailing window, completed by a bound `days` value.
///
/// Evaluated by the database at execution time; the bound is inclusive.
const WINDOW_CONDITION: &str = " WHERE created_at >= NOW() - INTERVAL '1 day' * ";

/// Single-row insert, parameters in [`crate::domain::entities::NewVisit`] field order.
pub const INSERT_VISIT: &str = "INSERT INTO site_visits \
     (site, page, referrer, user_agent, ip_address, screen) \
     VALUES ($1, $2, $3, $4, $5, $6) \
     RETURNING id, site, page, referrer, user_agent, ip_address, screen, created_at";

/// The five analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitQuery {
    VisitsOverTime,
    VisitsBySite,
    TopPages,
    ListVisits,
    Summary,
}

impl VisitQuery {
    fn projection(self) -> String {
        match self {
            Self::VisitsOverTime => {
                "SELECT DATE(created_at) AS date, COUNT(*) AS visits FROM site_visits".to_string()
            }
            Self::VisitsBySite => "SELECT site, COUNT(*) AS visits FROM site_visits".to_string(),
            Self::TopPages => "SELECT page, COUNT(*) AS visits FROM site_visits".to_string(),
            Self::ListVisits => format!("SELECT {VISIT_COLUMNS} FROM site_visits"),
            Self::Summary => "SELECT \
                 COUNT(*) AS total_visits, \
                 COUNT(DISTINCT site) AS total_sites, \
                 COUNT(DISTINCT page) AS total_pages, \
                 COUNT(DISTINCT ip_address) AS unique_visitors \
                 FROM site_visits"
                .to_string(),
        }
    }

    fn filters_site(self) -> bool {
        !matches!(self, Self::VisitsBySite)
    }

    fn filters_page(self) -> bool {
        matches!(self, Self::ListVisits)
    }

    /// Builds the fully parameterized query for `filter`.
    ///
    /// Fields the operation does not support are ignored.
    pub fn build(self, filter: &VisitFilter) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(self.projection());

        qb.push(WINDOW_CONDITION);
        qb.push_bind(filter.days);

        if self.filters_site()
            && let Some(site) = &filter.site
        {
            qb.push(" AND site = ");
            qb.push_bind(site.clone());
        }

        if self.filters_page()
            && let Some(page) = &filter.page
        {
            qb.push(" AND page = ");
            qb.push_bind(page.clone());
        }

        match self {
            Self::VisitsOverTime => {
                qb.push(" GROUP BY DATE(created_at) ORDER BY date ASC");
            }
            Self::VisitsBySite => {
                qb.push(" GROUP BY site");
            }
            Self::TopPages => {
                qb.push(" GROUP BY page ORDER BY visits DESC LIMIT ");
                qb.push_bind(filter.limit);
            }
            Self::ListVisits => {
                qb.push(" ORDER BY created_at DESC LIMIT ");
                qb.push_bind(filter.limit);
                qb.push(" OFFSET ");
                qb.push_bind(filter.offset);
            }
            Self::Summary => {}
        }

        qb
    }
}
