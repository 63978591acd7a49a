//! Data Transfer Objects for API requests and responses.

pub mod analytics;
pub mod health;
pub mod message;
pub mod track;
