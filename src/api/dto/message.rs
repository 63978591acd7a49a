//! Plain `{ "message": ... }` body used by acknowledgements and errors.

use serde::Serialize;

/// Single-field JSON response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
