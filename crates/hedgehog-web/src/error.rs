//! Error types for the web service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a browser-facing service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hedgehog_core::StoreError;

use crate::render;

/// Web service error type.
///
/// Validation failures and missing records are handled inside the
/// handlers; anything that reaches this type is a store failure.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The record store failed underneath a handler.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::Store(err) => {
                tracing::error!(error = %err, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Service Unavailable",
                    "The hedgehog catalog is temporarily unavailable. Please try again later.",
                )
            }
        };

        (status, render::error_page(title, message)).into_response()
    }
}
