use sea_orm::DatabaseConnection;

use crate::server::{
    config::SettingsConfig,
    data::settings::SettingsRepository,
    error::{internal::InternalError, settings::SettingsError, AppError},
    model::{
        section::{Section, SectionData},
        settings::{SettingsDocument, UpdateSectionParams},
    },
};

/// Business logic for reading and changing an owner's settings document.
///
/// Every write is read-modify-write guarded by the stored revision: the document is
/// loaded, changed in memory, and written back only if nobody else wrote in between.
pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
    config: SettingsConfig,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: SettingsConfig) -> Self {
        Self { db, config }
    }

    /// Loads the owner's settings, creating and storing defaults on first access.
    pub async fn get_or_create(&self, owner_id: &str) -> Result<SettingsDocument, AppError> {
        let repo = SettingsRepository::new(self.db);

        if let Some(existing) = repo.find_by_owner(owner_id).await? {
            return Ok(SettingsDocument::from_entity(existing)?);
        }

        let defaults = SettingsDocument::defaults(owner_id);
        if repo.insert_if_absent(&defaults).await? {
            tracing::info!(owner_id, "Created default settings");
            return Ok(defaults);
        }

        // Lost a creation race; read back whatever the winner stored
        let stored = repo
            .find_by_owner(owner_id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite(owner_id.to_string()))?;

        Ok(SettingsDocument::from_entity(stored)?)
    }

    /// Returns a single section of the owner's settings.
    pub async fn get_section(
        &self,
        owner_id: &str,
        section: Section,
    ) -> Result<SectionData, AppError> {
        let document = self.get_or_create(owner_id).await?;

        Ok(document.section(section).clone())
    }

    /// Merges into one section, or replaces several when targeting `all`.
    ///
    /// # Arguments
    /// - `owner_id` - Owner of the document
    /// - `params` - Parsed section target and payload
    /// - `expected_revision` - Revision from the client's `If-Match`, if any
    ///
    /// # Returns
    /// - `Ok(SettingsDocument)` - The stored document after the update
    /// - `Err(AppError::SettingsErr)` - Validation, revision mismatch or write conflict
    pub async fn update_section(
        &self,
        owner_id: &str,
        params: UpdateSectionParams,
        expected_revision: Option<i64>,
    ) -> Result<SettingsDocument, AppError> {
        let target = params.target;
        let mut document = self.get_or_create(owner_id).await?;
        check_revision(expected_revision, document.revision)?;

        document.apply_update(params)?;
        let document = self.save(document).await?;

        tracing::info!(owner_id, ?target, revision = document.revision, "Updated settings");

        Ok(document)
    }

    /// Applies a dotted field-path patch.
    ///
    /// Unknown paths are skipped with a warning unless strict patching is configured,
    /// in which case they fail the request.
    pub async fn patch_fields(
        &self,
        owner_id: &str,
        fields: SectionData,
        expected_revision: Option<i64>,
    ) -> Result<SettingsDocument, AppError> {
        if fields.is_empty() {
            return Err(SettingsError::EmptyPatch.into());
        }

        let mut document = self.get_or_create(owner_id).await?;
        check_revision(expected_revision, document.revision)?;

        let outcome = document.apply_patch(fields, self.config.strict_patch)?;
        if !outcome.ignored.is_empty() {
            tracing::warn!(owner_id, ignored = ?outcome.ignored, "Ignored unknown settings paths");
        }

        let document = self.save(document).await?;

        tracing::info!(
            owner_id,
            touched = ?outcome.touched,
            revision = document.revision,
            "Patched settings"
        );

        Ok(document)
    }

    /// Replaces the owner's settings with fresh defaults.
    ///
    /// The revision keeps counting up from the previous document so stale `If-Match`
    /// values from before the reset are still rejected.
    pub async fn reset(&self, owner_id: &str) -> Result<SettingsDocument, AppError> {
        let repo = SettingsRepository::new(self.db);

        let previous_revision = repo
            .find_by_owner(owner_id)
            .await?
            .map(|model| model.revision);

        let mut document = SettingsDocument::defaults(owner_id);
        if let Some(revision) = previous_revision {
            document.revision = revision + 1;
        }

        let stored = repo.upsert(&document).await?;

        tracing::info!(owner_id, revision = stored.revision, "Reset settings to defaults");

        Ok(SettingsDocument::from_entity(stored)?)
    }

    /// Deletes the owner's settings document.
    ///
    /// # Returns
    /// - `Ok(())` - Document deleted
    /// - `Err(SettingsError::NothingToDelete)` - Owner had no document
    pub async fn delete(&self, owner_id: &str) -> Result<(), AppError> {
        let repo = SettingsRepository::new(self.db);

        if !repo.delete_by_owner(owner_id).await? {
            return Err(SettingsError::NothingToDelete.into());
        }

        tracing::info!(owner_id, "Deleted settings");

        Ok(())
    }

    /// Writes a modified document if its stored revision is still the one it was read at.
    pub(super) async fn save(
        &self,
        mut document: SettingsDocument,
    ) -> Result<SettingsDocument, AppError> {
        let repo = SettingsRepository::new(self.db);
        let read_revision = document.revision;

        document.advance();

        if !repo.update_if_revision(&document, read_revision).await? {
            tracing::debug!(
                owner_id = %document.owner_id,
                read_revision,
                "Settings write lost a concurrent update"
            );
            return Err(SettingsError::WriteConflict.into());
        }

        Ok(document)
    }
}

/// Compares a client-supplied revision against the stored one.
fn check_revision(expected: Option<i64>, current: i64) -> Result<(), SettingsError> {
    match expected {
        Some(expected) if expected != current => {
            Err(SettingsError::RevisionMismatch { expected, current })
        }
        _ => Ok(()),
    }
}
