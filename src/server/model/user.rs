//! User domain model.
//!
//! Users are the owners of settings documents. They are created by the wider
//! application; this service only reads them to confirm that a token's subject exists.

use chrono::{DateTime, Utc};

/// An application user that can own a settings document.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique user identifier, matching the `sub` claim of issued tokens.
    pub id: String,
    /// Display name of the user.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}
