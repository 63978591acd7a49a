//! Domain layer containing the pageview model and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Stored pageview events
//! - [`filter`] - Shared filter parameters and their clamping rules
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on HTTP or SQL specifics; the
//! PostgreSQL implementation lives in [`crate::infrastructure`].

pub mod entities;
pub mod filter;
pub mod repositories;
