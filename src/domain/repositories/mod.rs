//! Repository trait definitions for the domain layer.
//!
//! The analytics operations are written against [`VisitRepository`] so that
//! query composition lives in one place per storage backend.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_visits.rs` for usage examples.

pub mod visit_repository;

pub use visit_repository::{DailyVisits, PageVisits, SiteVisits, VisitRepository, VisitSummary};

#[cfg(test)]
pub use visit_repository::MockVisitRepository;
