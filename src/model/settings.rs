use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Full settings document for one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub owner_id: String,
    #[schema(value_type = Object)]
    pub preferences: Map<String, Value>,
    #[schema(value_type = Object)]
    pub notifications: Map<String, Value>,
    #[schema(value_type = Object)]
    pub integrations: Map<String, Value>,
    #[schema(value_type = Object)]
    pub billing: Map<String, Value>,
    #[schema(value_type = Object)]
    pub security: Map<String, Value>,
    #[schema(value_type = Object)]
    pub appearance: Map<String, Value>,
    #[schema(value_type = Object)]
    pub analytics: Map<String, Value>,
    #[schema(value_type = Object)]
    pub customization: Map<String, Value>,
    pub last_updated: DateTime<Utc>,
    pub version: String,
    /// Write counter, also sent as the `ETag` response header.
    pub revision: i64,
}

/// Success envelope wrapping a full settings document.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponseDto {
    pub success: bool,
    pub message: String,
    pub data: SettingsDto,
}

/// Success envelope wrapping a single section.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionResponseDto {
    pub success: bool,
    pub message: String,
    pub section: String,
    #[schema(value_type = Object)]
    pub data: Map<String, Value>,
}

/// Body of `PUT /api/settings`.
///
/// `section` is one of the eight section names or `all`. For a single section `data`
/// is shallow-merged into the stored section; for `all` every section key inside
/// `data` replaces the stored section. The payload may also be sent under a key named
/// after the section instead of `data`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSettingsDto {
    #[schema(example = "security")]
    pub section: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<Map<String, Value>>,
}
