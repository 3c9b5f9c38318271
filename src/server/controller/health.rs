use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::AppError, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// GET /api/health - Liveness check
///
/// Pings the database. Needs no authentication.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = MessageDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("ok"))))
}
