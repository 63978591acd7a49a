//! Shared filtering contract for the analytics queries.
//!
//! Every read operation looks back over a trailing window of `days` and may
//! narrow the rows by exact `site` / `page` matches. Ranked and listing
//! queries additionally take a `limit`, and the raw listing an `offset`.
//!
//! `limit` and `offset` are clamped here. `days` is passed through untouched:
//! negative or very large windows are the caller's business.

/// Trailing window used when the caller gives no usable `days` value.
pub const DEFAULT_DAYS: i64 = 30;

/// Default number of rows for the top-pages ranking.
pub const DEFAULT_TOP_PAGES_LIMIT: i64 = 10;

/// Default page size for the raw visit listing.
pub const DEFAULT_VISITS_LIMIT: i64 = 100;

/// Smallest accepted `limit`.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 1000;

/// Filter criteria for analytics queries.
///
/// Operations ignore the fields they do not support; for example the
/// by-site aggregate only looks at `days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitFilter {
    pub days: i64,
    pub site: Option<String>,
    pub page: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl VisitFilter {
    /// Creates a filter over the trailing `days` with no site/page scoping.
    pub fn new(days: i64) -> Self {
        Self {
            days,
            site: None,
            page: None,
            limit: DEFAULT_VISITS_LIMIT,
            offset: 0,
        }
    }

    /// Restricts rows to an exact site match.
    pub fn with_site(mut self, site: Option<String>) -> Self {
        self.site = site.filter(|s| !s.is_empty());
        self
    }

    /// Restricts rows to an exact page match.
    pub fn with_page(mut self, page: Option<String>) -> Self {
        self.page = page.filter(|p| !p.is_empty());
        self
    }

    /// Sets the row limit, clamped to `[MIN_LIMIT, MAX_LIMIT]`.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = clamp_limit(limit);
        self
    }

    /// Sets the row offset, clamped to be non-negative.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = clamp_offset(offset);
        self
    }
}

impl Default for VisitFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS)
    }
}

/// Clamps a requested row limit to `[MIN_LIMIT, MAX_LIMIT]`.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// Clamps a requested offset to zero or more.
pub fn clamp_offset(offset: i64) -> i64 {
    offset.max(0)
}
