use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Behavior switches for the settings endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsConfig {
    /// Reject field-path patches that name unknown keys instead of skipping them.
    pub strict_patch: bool,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_address: String,
    /// Allowed CORS origin; any origin when unset.
    pub cors_origin: Option<String>,
    pub settings: SettingsConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|s| !s.is_empty()),
            settings: SettingsConfig {
                strict_patch: match std::env::var("SETTINGS_STRICT_PATCH") {
                    Ok(value) => parse_flag("SETTINGS_STRICT_PATCH", &value)?,
                    Err(_) => false,
                },
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses a boolean environment flag.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, case-insensitively.
fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
