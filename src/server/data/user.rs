//! User data repository for database operations.
//!
//! Users are owned by the wider application. This repository only looks them up so the
//! auth guard can confirm that a token's subject still exists.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing read access to user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Arguments
    /// - `user_id` - User identifier, as carried in the token `sub` claim
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await
    }
}
