//! Business logic services for the application layer.

pub mod analytics_service;
pub mod tracking_service;

pub use analytics_service::AnalyticsService;
pub use tracking_service::TrackingService;
