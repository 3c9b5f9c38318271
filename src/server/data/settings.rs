//! Settings data repository for database operations.
//!
//! This module provides the `SettingsRepository` for managing settings documents in the
//! database. Each owner has at most one row, keyed by `owner_id`. Creation uses
//! insert-on-conflict-do-nothing so concurrent first reads cannot create duplicates, and
//! updates are conditional on the stored revision so concurrent writers cannot silently
//! overwrite each other.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serde_json::Value;

use crate::server::model::settings::SettingsDocument;

/// Repository providing database operations for settings documents.
pub struct SettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsRepository<'a> {
    /// Creates a new SettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the settings row for an owner.
    ///
    /// # Arguments
    /// - `owner_id` - Owner whose settings to load
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Settings row found
    /// - `Ok(None)` - Owner has no settings yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Option<entity::settings::Model>, DbErr> {
        entity::prelude::Settings::find_by_id(owner_id.to_string())
            .one(self.db)
            .await
    }

    /// Inserts a document unless the owner already has one.
    ///
    /// Uses `ON CONFLICT (owner_id) DO NOTHING`, so when two requests race to create the
    /// same owner's defaults exactly one insert wins and the other is a no-op.
    ///
    /// # Arguments
    /// - `document` - Document to insert
    ///
    /// # Returns
    /// - `Ok(true)` - Row inserted
    /// - `Ok(false)` - A row already existed, nothing written
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_absent(&self, document: &SettingsDocument) -> Result<bool, DbErr> {
        let mut model = to_active_model(document);
        model.created_at = ActiveValue::Set(Utc::now());

        let inserted = entity::prelude::Settings::insert(model)
            .on_conflict(
                OnConflict::column(entity::settings::Column::OwnerId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Writes a document only if the stored revision still equals `expected_revision`.
    ///
    /// All sections, `version`, `revision` and `last_updated` are overwritten from
    /// `document`. The caller is expected to have advanced `document.revision` already.
    ///
    /// # Arguments
    /// - `document` - New document state
    /// - `expected_revision` - Revision the caller read before modifying the document
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - Row missing or revision changed since it was read
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_if_revision(
        &self,
        document: &SettingsDocument,
        expected_revision: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Settings::update_many()
            .set(to_active_model(document))
            .filter(entity::settings::Column::OwnerId.eq(document.owner_id.as_str()))
            .filter(entity::settings::Column::Revision.eq(expected_revision))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Inserts or fully overwrites an owner's document.
    ///
    /// On conflict every column except `owner_id` and `created_at` is replaced.
    ///
    /// # Arguments
    /// - `document` - Document to store
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        document: &SettingsDocument,
    ) -> Result<entity::settings::Model, DbErr> {
        use entity::settings::Column;

        let mut model = to_active_model(document);
        model.created_at = ActiveValue::Set(Utc::now());

        entity::prelude::Settings::insert(model)
            .on_conflict(
                OnConflict::column(Column::OwnerId)
                    .update_columns([
                        Column::Preferences,
                        Column::Notifications,
                        Column::Integrations,
                        Column::Billing,
                        Column::Security,
                        Column::Appearance,
                        Column::Analytics,
                        Column::Customization,
                        Column::Version,
                        Column::Revision,
                        Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find_by_owner(&document.owner_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("settings for {}", document.owner_id)))
    }

    /// Deletes an owner's document.
    ///
    /// # Arguments
    /// - `owner_id` - Owner whose settings to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_owner(&self, owner_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Settings::delete_by_id(owner_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Builds an active model carrying every document column.
///
/// `created_at` is left unset so updates never touch it; inserts set it explicitly.
fn to_active_model(document: &SettingsDocument) -> entity::settings::ActiveModel {
    let section =
        |data: &serde_json::Map<String, Value>| ActiveValue::Set(Value::Object(data.clone()));

    entity::settings::ActiveModel {
        owner_id: ActiveValue::Set(document.owner_id.clone()),
        preferences: section(&document.preferences),
        notifications: section(&document.notifications),
        integrations: section(&document.integrations),
        billing: section(&document.billing),
        security: section(&document.security),
        appearance: section(&document.appearance),
        analytics: section(&document.analytics),
        customization: section(&document.customization),
        version: ActiveValue::Set(document.version.clone()),
        revision: ActiveValue::Set(document.revision),
        last_updated: ActiveValue::Set(document.last_updated),
        created_at: ActiveValue::NotSet,
    }
}
