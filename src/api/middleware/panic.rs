//! Converts handler panics into a logged 500 so the server keeps running.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::dto::message::MessageResponse;

/// Message returned when a handler panicked.
pub const INTERNAL_ERROR: &str = "Internal server error";

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates the panic-catching layer.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new(INTERNAL_ERROR)),
    )
        .into_response()
}
