use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Caller identity header {0} is not present in request")]
    MissingCaller(&'static str),
    #[error("Caller identity header {header} is not a valid user ID: {reason}")]
    InvalidCaller {
        header: &'static str,
        reason: String,
    },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingCaller(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Authentication required",
                self.to_string(),
            ),
            Self::InvalidCaller { .. } => {
                error_response(StatusCode::BAD_REQUEST, "Invalid user ID", self.to_string())
            }
        }
    }
}
