//! Application layer services.
//!
//! Services consume the [`crate::domain::repositories::VisitRepository`]
//! trait and give HTTP handlers and the admin CLI one entry point per
//! operation.
//!
//! # Available Services
//!
//! - [`services::tracking_service::TrackingService`] - Pageview ingestion
//! - [`services::analytics_service::AnalyticsService`] - Aggregate and listing queries

pub mod services;
