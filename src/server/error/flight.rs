use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum FlightError {
    /// Every field that failed validation, in field order
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Flight {0} not found")]
    NotFound(Uuid),
}

impl IntoResponse for FlightError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Validation(_) => {
                let message = self.to_string();
                error_response(StatusCode::BAD_REQUEST, message.clone(), message)
            }
            Self::NotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Flight not found", self.to_string())
            }
        }
    }
}
