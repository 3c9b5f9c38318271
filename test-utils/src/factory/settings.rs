//! Settings factory for creating stored settings documents.
//!
//! Sections default to empty objects; tests that need the service's real defaults should
//! create the document through the service instead.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for inserting a settings row with chosen section contents.
pub struct SettingsFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    sections: serde_json::Map<String, Value>,
    revision: i64,
}

impl<'a> SettingsFactory<'a> {
    /// Creates a new SettingsFactory for `owner_id`.
    ///
    /// Defaults:
    /// - every section: `{}`
    /// - version: `"1.0.0"`
    /// - revision: `1`
    pub fn new(db: &'a DatabaseConnection, owner_id: impl Into<String>) -> Self {
        Self {
            db,
            owner_id: owner_id.into(),
            sections: serde_json::Map::new(),
            revision: 1,
        }
    }

    /// Sets the stored value of one section column.
    ///
    /// The value is stored as given, which allows writing non-object values to
    /// exercise corrupt-row handling.
    pub fn section(mut self, name: &str, value: Value) -> Self {
        self.sections.insert(name.to_string(), value);
        self
    }

    /// Sets the stored revision.
    pub fn revision(mut self, revision: i64) -> Self {
        self.revision = revision;
        self
    }

    /// Builds and inserts the settings row.
    ///
    /// # Returns
    /// - `Ok(entity::settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::settings::Model, DbErr> {
        let Self {
            db,
            owner_id,
            mut sections,
            revision,
        } = self;
        let mut take = |name: &str| {
            ActiveValue::Set(sections.remove(name).unwrap_or_else(|| json!({})))
        };
        let now = Utc::now();

        entity::settings::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            preferences: take("preferences"),
            notifications: take("notifications"),
            integrations: take("integrations"),
            billing: take("billing"),
            security: take("security"),
            appearance: take("appearance"),
            analytics: take("analytics"),
            customization: take("customization"),
            version: ActiveValue::Set("1.0.0".to_string()),
            revision: ActiveValue::Set(revision),
            last_updated: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
        }
        .insert(db)
        .await
    }
}

/// Creates a settings row with empty sections for `owner_id`.
pub async fn create_settings(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::settings::Model, DbErr> {
    SettingsFactory::new(db, owner_id).build().await
}
