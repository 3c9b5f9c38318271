use axum::http::{header::IF_MATCH, HeaderMap};

use crate::server::error::settings::SettingsError;

/// Reads the revision a client expects from its `If-Match` header.
///
/// Accepts the tags this service emits (`"3"`), their weak form (`W/"3"`) and a bare
/// number. `*` matches any revision and is treated like an absent header.
///
/// # Arguments
/// - `headers` - Request headers
///
/// # Returns
/// - `Ok(Some(i64))` - Revision the client expects
/// - `Ok(None)` - No header, or `*`
/// - `Err(SettingsError::InvalidRevisionTag)` - Header present but not a revision tag
pub fn parse_revision_tag(headers: &HeaderMap) -> Result<Option<i64>, SettingsError> {
    let Some(value) = headers.get(IF_MATCH) else {
        return Ok(None);
    };

    let raw = value
        .to_str()
        .map_err(|_| SettingsError::InvalidRevisionTag("<non-ascii>".to_string()))?
        .trim();

    if raw == "*" {
        return Ok(None);
    }

    let tag = raw.strip_prefix("W/").unwrap_or(raw);
    let tag = tag
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(tag);

    tag.parse::<i64>()
        .map(Some)
        .map_err(|_| SettingsError::InvalidRevisionTag(raw.to_string()))
}

/// Formats a revision as a strong entity tag.
pub fn etag_value(revision: i64) -> String {
    format!("\"{}\"", revision)
}
