//! Unified error types for the evolution engine service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Unified error type for service startup and operation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure raised inside a request handler.
///
/// Handlers return `Result<_, ApiError>`; the [`IntoResponse`] impl is the
/// single boundary converting any failure into an HTTP 500 body. Nothing
/// else in the serving path maps errors to responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Timestamp rendering failed.
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

/// Body of every 500 response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Generic error label.
    pub error: &'static str,
    /// Human-readable detail.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");

        let body = ErrorResponse {
            error: "Internal server error",
            message: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;
