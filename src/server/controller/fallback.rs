use axum::{http::StatusCode, http::Uri, response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Responds to any request that matched no route
pub async fn route_not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri);

    (
        StatusCode::NOT_FOUND,
        Json(MessageDto {
            success: false,
            message: format!("Route {} not found", uri),
        }),
    )
}
