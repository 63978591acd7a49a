//! PostgreSQL persistence.
//!
//! - [`visit_query`] - Runtime query composition for the analytics operations
//! - [`PgVisitRepository`] - [`crate::domain::repositories::VisitRepository`] over a `PgPool`

pub mod pg_visit_repository;
pub mod visit_query;

pub use pg_visit_repository::PgVisitRepository;
