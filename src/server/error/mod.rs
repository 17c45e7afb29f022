//! Error types for the logbook server.
//!
//! Domain-specific errors (configuration, caller identity, flights) are aggregated into the
//! single [`Error`] type used by services and controllers. Every error implements
//! `IntoResponse`, rendering the `{ success: false, message, error? }` envelope. The `error`
//! field carries the full error detail and is only present in development builds.

pub mod auth;
pub mod config;
pub mod flight;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, flight::FlightError},
};

/// Main error type for the logbook server.
///
/// Uses `thiserror`'s `#[from]` so domain errors and database errors convert with `?`.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Caller identity errors (missing or malformed `X-User-Id` header)
/// - Flight errors (validation failures, missing flights)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Caller identity error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Flight validation or lookup error.
    #[error(transparent)]
    FlightError(#[from] FlightError),
    /// Internal error indicating a bug in the logbook's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, malformed caller identity
/// - 401 Unauthorized - Missing caller identity
/// - 404 Not Found - Flight not found for the caller
/// - 500 Internal Server Error - Everything else, logged at `error`
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FlightError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the error envelope.
///
/// `detail` is dropped outside of development builds so internals never leak in production.
pub fn error_response(status: StatusCode, message: impl Into<String>, detail: String) -> Response {
    let development_mode = cfg!(debug_assertions);

    (
        status,
        Json(ErrorDto {
            success: false,
            message: message.into(),
            error: development_mode.then_some(detail),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            self.0.to_string(),
        )
    }
}
