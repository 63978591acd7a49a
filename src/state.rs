//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, TrackingService};
use crate::domain::repositories::VisitRepository;

/// Handles to the services. Cheap to clone; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
    pub analytics_service: Arc<AnalyticsService>,
}

impl AppState {
    /// Wires both services to the same repository.
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self {
            tracking_service: Arc::new(TrackingService::new(repository.clone())),
            analytics_service: Arc::new(AnalyticsService::new(repository)),
        }
    }
}
