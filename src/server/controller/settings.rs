use axum::{
    extract::{Path, State},
    http::{header::ETAG, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        settings::{SectionResponseDto, SettingsResponseDto, UpdateSettingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            section::Section,
            settings::{SettingsDocument, UpdateSectionParams},
        },
        service::settings::SettingsService,
        state::AppState,
        util::parse::{etag_value, parse_revision_tag},
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Wraps a document in the success envelope and tags the response with its revision.
fn document_response(document: SettingsDocument, message: &str) -> impl IntoResponse {
    let etag = etag_value(document.revision);

    (
        StatusCode::OK,
        [(ETAG, etag)],
        Json(SettingsResponseDto {
            success: true,
            message: message.to_string(),
            data: document.into_dto(),
        }),
    )
}

/// GET /api/settings - Get the caller's settings document
///
/// Creates and stores the default document on first access.
///
/// # Authentication
/// Requires a valid bearer token or `auth_token` cookie
///
/// # Returns
/// - `200 OK`: Settings document, with `ETag` set to its revision
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Token subject is not a known user
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Settings document", body = SettingsResponseDto,
            headers(("ETag" = String, description = "Current revision"))),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let service = SettingsService::new(&state.db, state.settings);
    let document = service.get_or_create(&user.id).await?;

    Ok(document_response(document, "Settings retrieved successfully"))
}

/// GET /api/settings/{section} - Get one section of the caller's settings
///
/// # Path Parameters
/// - `section`: One of the eight section names (`all` is not accepted)
///
/// # Returns
/// - `200 OK`: The section's fields
/// - `400 Bad Request`: Unknown section name
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Token subject is not a known user
#[utoipa::path(
    get,
    path = "/api/settings/{section}",
    tag = SETTINGS_TAG,
    params(
        ("section" = String, Path, description = "Section name, e.g. security")
    ),
    responses(
        (status = 200, description = "Settings section", body = SectionResponseDto),
        (status = 400, description = "Invalid section", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let section = section.parse::<Section>()?;

    let service = SettingsService::new(&state.db, state.settings);
    let data = service.get_section(&user.id, section).await?;

    Ok((
        StatusCode::OK,
        Json(SectionResponseDto {
            success: true,
            message: "Settings section retrieved successfully".to_string(),
            section: section.to_string(),
            data,
        }),
    ))
}

/// PUT /api/settings - Merge into one section or replace several
///
/// For a single section the payload is shallow-merged over the stored section. For
/// `all` each section named in the payload replaces the stored one; every section is
/// validated before anything is written.
///
/// # Headers
/// - `If-Match` (optional): Revision the change is based on
///
/// # Returns
/// - `200 OK`: Updated settings document
/// - `400 Bad Request`: Missing or unknown section, missing payload, or validation failure
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Token subject is not a known user
/// - `409 Conflict`: A concurrent write landed first
/// - `412 Precondition Failed`: `If-Match` revision is stale
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    request_body = UpdateSettingsDto,
    params(
        ("If-Match" = Option<String>, Header, description = "Expected revision tag")
    ),
    responses(
        (status = 200, description = "Settings updated", body = SettingsResponseDto,
            headers(("ETag" = String, description = "New revision"))),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 412, description = "Revision mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let expected_revision = parse_revision_tag(&headers)?;
    let params = UpdateSectionParams::from_body(body)?;

    let service = SettingsService::new(&state.db, state.settings);
    let document = service
        .update_section(&user.id, params, expected_revision)
        .await?;

    Ok(document_response(document, "Settings updated successfully"))
}

/// PATCH /api/settings - Set individual fields by dotted path
///
/// The body maps paths such as `security.sessionTimeout` to new values. Unknown paths
/// are skipped unless strict patching is enabled.
///
/// # Returns
/// - `200 OK`: Updated settings document
/// - `400 Bad Request`: Empty body, validation failure, or unknown path in strict mode
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Token subject is not a known user
/// - `409 Conflict`: A concurrent write landed first
/// - `412 Precondition Failed`: `If-Match` revision is stale
#[utoipa::path(
    patch,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    request_body(content = Object, description = "Dotted field path to new value"),
    params(
        ("If-Match" = Option<String>, Header, description = "Expected revision tag")
    ),
    responses(
        (status = 200, description = "Settings patched", body = SettingsResponseDto,
            headers(("ETag" = String, description = "New revision"))),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 412, description = "Revision mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(fields): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let expected_revision = parse_revision_tag(&headers)?;

    let service = SettingsService::new(&state.db, state.settings);
    let document = service
        .patch_fields(&user.id, fields, expected_revision)
        .await?;

    Ok(document_response(document, "Settings updated successfully"))
}

/// POST /api/settings - Reset the caller's settings to defaults
///
/// Discards every customization. There is no undo.
///
/// # Returns
/// - `200 OK`: Fresh default document
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Token subject is not a known user
#[utoipa::path(
    post,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Settings reset", body = SettingsResponseDto,
            headers(("ETag" = String, description = "New revision"))),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let service = SettingsService::new(&state.db, state.settings);
    let document = service.reset(&user.id).await?;

    Ok(document_response(document, "Settings reset to defaults"))
}

/// DELETE /api/settings - Delete the caller's settings document
///
/// The next read recreates defaults.
///
/// # Returns
/// - `200 OK`: Document deleted
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Unknown user, or no document to delete
#[utoipa::path(
    delete,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Settings deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User or settings not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let service = SettingsService::new(&state.db, state.settings);
    service.delete(&user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Settings deleted successfully")),
    ))
}
