use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No token was supplied in the `Authorization` header or the `auth_token` cookie.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authentication token provided")]
    MissingToken,

    /// The supplied token failed signature, expiry, or claim validation.
    ///
    /// Results in a 401 Unauthorized response. The underlying reason is only logged.
    #[error("Invalid authentication token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The token is valid but its subject has no user record.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} referenced by token does not exist")]
    UserNotInDatabase(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::UserNotInDatabase(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with "Not authenticated"
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::MissingToken | Self::InvalidToken(_) => "Not authenticated",
            Self::UserNotInDatabase(_) => "User not found",
        };

        (self.status_code(), Json(ErrorDto::new(message))).into_response()
    }
}
