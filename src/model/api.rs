use serde::{Deserialize, Serialize};

/// Envelope wrapping every successful API response
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true` for successful responses
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    /// Successful response carrying a page of `data`
    pub fn page(data: T, pagination: PaginationDto) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: Some(pagination),
        }
    }
}

/// Envelope for responses that carry only a message
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Pagination details returned alongside list responses
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
pub struct PaginationDto {
    pub limit: u64,
    pub offset: u64,
    /// Number of records in this page
    pub count: u64,
}

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// Always `false`
    pub success: bool,
    /// The error message
    pub message: String,
    /// Full error detail, only present in development builds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness probe response
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct HealthDto {
    pub success: bool,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
