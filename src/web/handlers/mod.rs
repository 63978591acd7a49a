//! Handlers producing non-JSON documents.

pub mod by_site_chart;

pub use by_site_chart::by_site_chart_handler;
