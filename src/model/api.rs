use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Envelope for successful responses that carry no data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Always `true`.
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
