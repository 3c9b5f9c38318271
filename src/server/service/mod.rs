//! Business logic layer.
//!
//! Services sit between the controllers and the repositories. `SettingsService` owns the
//! read-modify-write cycle for settings documents and `TokenVerifier` authenticates
//! request tokens.

pub mod settings;
pub mod token;
