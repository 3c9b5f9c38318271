use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while reading or modifying a settings document.
///
/// Every variant is caused by the request (or a concurrent request) rather than by
/// a fault in the service, so the message is safe to return to the client as-is.
#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    /// The request body has no `section` field.
    #[error("Section is required")]
    MissingSection,

    /// The section name is not one of the known sections (or `all`).
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    /// The request named a section but carried no payload for it.
    #[error("Settings data is required")]
    MissingData,

    /// A payload that must be a JSON object was something else.
    #[error("'{0}' must be a JSON object")]
    NotAnObject(String),

    /// A known field failed its schema rule.
    #[error("Validation failed for {section}.{field}: {message}")]
    Validation {
        /// Section containing the field
        section: String,
        /// Field name within the section
        field: String,
        /// Human readable reason
        message: String,
    },

    /// A field-path patch with no entries.
    #[error("No fields provided to update")]
    EmptyPatch,

    /// A field path that matches neither a section field nor a writable top-level key.
    ///
    /// Only raised when strict patching is enabled; otherwise such paths are skipped.
    #[error("Unknown settings field: {0}")]
    UnknownField(String),

    /// The `If-Match` header could not be read as a revision tag.
    #[error("Invalid If-Match header: {0}")]
    InvalidRevisionTag(String),

    /// The client's `If-Match` revision is stale.
    #[error("Settings have changed (expected revision {expected}, current revision {current})")]
    RevisionMismatch {
        /// Revision the client based its change on
        expected: i64,
        /// Revision currently stored
        current: i64,
    },

    /// Another write landed between this request's read and its write.
    #[error("Settings were modified concurrently, reload and try again")]
    WriteConflict,

    /// Delete was requested but the owner has no settings document.
    #[error("No settings found to delete")]
    NothingToDelete,
}

impl SettingsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RevisionMismatch { .. } => StatusCode::PRECONDITION_FAILED,
            Self::WriteConflict => StatusCode::CONFLICT,
            Self::NothingToDelete => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
