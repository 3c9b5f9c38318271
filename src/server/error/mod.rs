//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so every handler failure ends up as a status code plus the
//! `{ success: false, message }` JSON envelope.

pub mod auth;
pub mod config;
pub mod internal;
pub mod settings;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, settings::SettingsError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` and `SettingsError` handle
/// their own response mapping, everything else becomes a 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 404 Not Found).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Settings document error (invalid section, validation, revision checks).
    ///
    /// Delegates to `SettingsError::into_response()`.
    #[error(transparent)]
    SettingsErr(#[from] SettingsError),

    /// Unexpected state inside the application, such as a corrupt stored document.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, typically from binding the listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Authentication and settings errors delegate to their own response handling. Every
/// other error is logged with full details and returns a generic message.
///
/// # Returns
/// - 500 Internal Server Error - For all other error types (DbErr, InternalErr, etc.)
/// - Variable - For `AuthErr` and `SettingsErr`, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::SettingsErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
