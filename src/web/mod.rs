//! Server-rendered images.
//!
//! # Modules
//!
//! - [`chart`] - SVG spline chart layout and serialization
//! - [`handlers`] - Chart endpoint
//! - [`routes`] - Chart route configuration

pub mod chart;
pub mod handlers;
pub mod routes;
