use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        health::{self, HEALTH_TAG},
        settings::{self, SETTINGS_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Settings Service",
        description = "Per-owner settings documents with section merge and field patching"
    ),
    tags(
        (name = SETTINGS_TAG, description = "Settings document endpoints"),
        (name = HEALTH_TAG, description = "Service health")
    )
)]
struct ApiDoc;

/// Builds the API router and mounts Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            settings::get_settings,
            settings::update_settings,
            settings::patch_settings,
            settings::reset_settings,
            settings::delete_settings
        ))
        .routes(routes!(settings::get_settings_section))
        .routes(routes!(health::health))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
