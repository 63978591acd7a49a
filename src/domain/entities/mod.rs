//! Core domain entities.
//!
//! - [`Visit`] - A stored pageview event
//! - [`NewVisit`] - Input for recording a pageview
//!
//! Aggregate rows returned by analytics queries live next to the repository
//! trait in [`crate::domain::repositories`].

pub mod visit;

pub use visit::{NewVisit, Visit};
