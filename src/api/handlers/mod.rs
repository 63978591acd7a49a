//! HTTP request handlers for API endpoints.

pub mod analytics;
pub mod health;
pub mod track;

pub use analytics::{
    by_site_handler, summary_handler, top_pages_handler, visits_handler, visits_over_time_handler,
};
pub use health::{health_handler, root_handler};
pub use track::track_handler;
