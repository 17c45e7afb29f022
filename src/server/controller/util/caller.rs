use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::server::error::{auth::AuthError, Error};

/// Request header carrying the caller's owner ID
pub static CALLER_HEADER: &str = "x-user-id";

/// The owner ID of the caller, read from the `X-User-Id` header
///
/// Rejects with 401 when the header is missing and 400 when it is not a UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallerId(pub Uuid);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CALLER_HEADER)
            .ok_or(AuthError::MissingCaller(CALLER_HEADER))?;

        let value = value.to_str().map_err(|e| AuthError::InvalidCaller {
            header: CALLER_HEADER,
            reason: e.to_string(),
        })?;

        let owner_id = Uuid::parse_str(value.trim()).map_err(|e| AuthError::InvalidCaller {
            header: CALLER_HEADER,
            reason: e.to_string(),
        })?;

        Ok(Self(owner_id))
    }
}
