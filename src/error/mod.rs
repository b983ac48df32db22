//! Error types for the TechCorp API server.
//!
//! A single [`Error`] enum covers the whole request path: store lookups,
//! payload validation, unique-constraint violations and database failures.
//! Every variant maps onto the standard response envelope through
//! `IntoResponse`, so no controller ever hand-rolls an error body.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub use config::ConfigError;

use crate::model::api::ErrorResponse;

/// Main error type for the TechCorp API server.
///
/// Store implementations return this directly; controllers propagate it with
/// `?` and rely on the `IntoResponse` mapping below. The taxonomy follows the
/// HTTP contract: missing records are 404, rejected input is 400, a mutation
/// against the read-only backend is 405, everything else is 500.
#[derive(Error, Debug)]
pub enum Error {
    /// A record with the requested id (or required path parameter) does not exist.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    /// One or more fields failed validation; one message per offending field.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    /// A unique-constraint violation (employee email, department name, financial year).
    #[error("a record with this {field} already exists")]
    Duplicate { field: &'static str },
    /// The id path parameter is not a valid identifier for the active backend.
    #[error("invalid {resource} id: {id}")]
    InvalidId { resource: &'static str, id: String },
    /// The request body could not be parsed as the expected JSON shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    /// A mutation was attempted against a backend that does not support it.
    #[error("the active storage backend does not support this operation")]
    ReadOnlyBackend,
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// MongoDB driver error (connection, query, index creation).
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
    /// Internal error indicating a bug in the server itself.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_)
            | Self::Duplicate { .. }
            | Self::InvalidId { .. }
            | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::ReadOnlyBackend => StatusCode::METHOD_NOT_ALLOWED,
            Self::Config(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// All error responses use the standard envelope with `success: false`.
/// Client errors carry their specific message; server errors are logged and
/// answered with a generic message, with the underlying diagnostic included
/// only outside production (`APP_ENV != "production"`).
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = if status.is_server_error() {
            tracing::error!("{}", self);

            let detail = if is_production() {
                None
            } else {
                Some(self.to_string())
            };
            ErrorResponse {
                success: false,
                message: "Internal server error".to_string(),
                error: detail,
            }
        } else {
            ErrorResponse {
                success: false,
                message: self.to_string(),
                error: None,
            }
        };

        (status, Json(body)).into_response()
    }
}

fn is_production() -> bool {
    std::env::var("APP_ENV").map(|v| v == "production").unwrap_or(false)
}
