//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let settings = factory::settings::create_settings(&db, &user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let settings = factory::settings::SettingsFactory::new(&db, "owner-1")
//!     .section("security", serde_json::json!({ "sessionTimeout": 10 }))
//!     .revision(4)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `settings` - Create settings documents
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod settings;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use settings::create_settings;
pub use user::create_user;
