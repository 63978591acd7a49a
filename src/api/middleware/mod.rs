//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Structured request/response logging
//! - [`panic`] - Panic recovery

pub mod panic;
pub mod tracing;
