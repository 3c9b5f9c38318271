//! Settings Service Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! settings service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas, factories for seeding rows,
//! and helpers for minting authentication tokens.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert users and settings rows
//! - **token**: JWT helpers matching the service's token format
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_settings_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_settings_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let user = factory::user::create_user(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod token;
