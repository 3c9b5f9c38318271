//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token verifier for authenticating requests
//! - Settings behavior configuration

use sea_orm::DatabaseConnection;

use super::{config::SettingsConfig, service::token::TokenVerifier};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenVerifier` holds only the decoding key and validation rules
/// - `SettingsConfig` is `Copy`
///
/// Nothing in here is mutable, so requests never contend on it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies bearer tokens and extracts the owner ID.
    pub tokens: TokenVerifier,

    /// Behavior switches for the settings endpoints.
    pub settings: SettingsConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token verifier configured with the signing secret
    /// - `settings` - Settings behavior configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenVerifier, settings: SettingsConfig) -> Self {
        Self {
            db,
            tokens,
            settings,
        }
    }
}
