//! Settings document domain model and the pure operations on it.
//!
//! The document is held in memory as eight typed section maps plus metadata. Every
//! mutation here (section merge, multi-section replace, field-path patch) is applied to
//! a working copy, validated, and only then committed, so a failed operation leaves the
//! document untouched. Persistence is the repository's job.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    model::settings::SettingsDto,
    server::{
        error::{internal::InternalError, settings::SettingsError},
        model::section::{Section, SectionData, SectionTarget},
    },
};

/// Schema version stamped on newly created documents.
pub const SETTINGS_VERSION: &str = "1.0.0";

/// Revision for a newly created document.
///
/// Taken from the clock in microseconds rather than starting at 1. A document recreated
/// after a delete therefore starts above every revision its predecessor reached, since
/// each write takes longer than a microsecond.
fn initial_revision(now: DateTime<Utc>) -> i64 {
    now.timestamp_micros()
}

/// A single owner's settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
    pub owner_id: String,
    pub preferences: SectionData,
    pub notifications: SectionData,
    pub integrations: SectionData,
    pub billing: SectionData,
    pub security: SectionData,
    pub appearance: SectionData,
    pub analytics: SectionData,
    pub customization: SectionData,
    /// Informational schema version.
    pub version: String,
    /// Write counter used for the `If-Match` check.
    pub revision: i64,
    pub last_updated: DateTime<Utc>,
}

impl SettingsDocument {
    /// Builds a complete default document for `owner_id`.
    ///
    /// Every call allocates new section maps from the section schemas.
    pub fn defaults(owner_id: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            owner_id: owner_id.into(),
            preferences: Section::Preferences.defaults(),
            notifications: Section::Notifications.defaults(),
            integrations: Section::Integrations.defaults(),
            billing: Section::Billing.defaults(),
            security: Section::Security.defaults(),
            appearance: Section::Appearance.defaults(),
            analytics: Section::Analytics.defaults(),
            customization: Section::Customization.defaults(),
            version: SETTINGS_VERSION.to_string(),
            revision: initial_revision(now),
            last_updated: now,
        }
    }

    pub fn section(&self, section: Section) -> &SectionData {
        match section {
            Section::Preferences => &self.preferences,
            Section::Notifications => &self.notifications,
            Section::Integrations => &self.integrations,
            Section::Billing => &self.billing,
            Section::Security => &self.security,
            Section::Appearance => &self.appearance,
            Section::Analytics => &self.analytics,
            Section::Customization => &self.customization,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut SectionData {
        match section {
            Section::Preferences => &mut self.preferences,
            Section::Notifications => &mut self.notifications,
            Section::Integrations => &mut self.integrations,
            Section::Billing => &mut self.billing,
            Section::Security => &mut self.security,
            Section::Appearance => &mut self.appearance,
            Section::Analytics => &mut self.analytics,
            Section::Customization => &mut self.customization,
        }
    }

    /// Returns true when all eight sections equal another document's sections.
    #[cfg(test)]
    ///
    /// Metadata (`revision`, `last_updated`, `version`) is ignored.
    pub fn same_sections(&self, other: &SettingsDocument) -> bool {
        Section::ALL
            .into_iter()
            .all(|section| self.section(section) == other.section(section))
    }

    /// Shallow-merges `patch` over one section.
    ///
    /// Keys in `patch` overwrite or extend the section; sibling keys and sibling
    /// sections are untouched.
    ///
    /// # Returns
    /// - `Ok(())` - Merged section passed validation and was stored
    /// - `Err(SettingsError::Validation)` - Merged section breaks its schema, document unchanged
    pub fn merge_section(
        &mut self,
        section: Section,
        patch: SectionData,
    ) -> Result<(), SettingsError> {
        let mut merged = self.section(section).clone();
        merged.extend(patch);

        section.validate(&merged)?;

        *self.section_mut(section) = merged;

        Ok(())
    }

    /// Replaces every section named in `payload` wholesale.
    ///
    /// Keys that are not section names are ignored. All provided sections are
    /// validated before any is written.
    ///
    /// # Returns
    /// - `Ok(Vec<Section>)` - Sections that were replaced
    /// - `Err(SettingsError::MissingData)` - Payload names no section
    /// - `Err(SettingsError::NotAnObject)` - A section value is not an object
    /// - `Err(SettingsError::Validation)` - A section breaks its schema
    pub fn replace_sections(&mut self, payload: SectionData) -> Result<Vec<Section>, SettingsError> {
        let mut replacements = Vec::new();

        for section in Section::ALL {
            let Some(value) = payload.get(section.as_str()) else {
                continue;
            };

            let Value::Object(data) = value else {
                return Err(SettingsError::NotAnObject(section.as_str().to_string()));
            };

            section.validate(data)?;
            replacements.push((section, data.clone()));
        }

        if replacements.is_empty() {
            return Err(SettingsError::MissingData);
        }

        let replaced = replacements.iter().map(|(section, _)| *section).collect();
        for (section, data) in replacements {
            *self.section_mut(section) = data;
        }

        Ok(replaced)
    }

    /// Applies a dotted field-path patch.
    ///
    /// Each path is split on its first dot into `(section, field)`. If the head names a
    /// section, `field` is set inside it verbatim. Otherwise the whole path is matched
    /// against the writable top-level keys: a section name (value must be an object) or
    /// `version` (value must be a string). Anything else is unknown: skipped and reported
    /// in the outcome, or rejected when `strict` is set.
    ///
    /// # Returns
    /// - `Ok(PatchOutcome)` - Patch applied, with the list of skipped paths
    /// - `Err(SettingsError::EmptyPatch)` - No entries in `fields`
    /// - `Err(SettingsError::UnknownField)` - Unknown path while `strict`
    /// - `Err(SettingsError::NotAnObject)` / `Err(SettingsError::Validation)` - Bad value
    pub fn apply_patch(
        &mut self,
        fields: SectionData,
        strict: bool,
    ) -> Result<PatchOutcome, SettingsError> {
        if fields.is_empty() {
            return Err(SettingsError::EmptyPatch);
        }

        let mut working = self.clone();
        let mut touched = BTreeSet::new();
        let mut ignored = Vec::new();

        for (path, value) in fields {
            if let Some((head, field)) = path.split_once('.') {
                if let Ok(section) = head.parse::<Section>() {
                    working.section_mut(section).insert(field.to_string(), value);
                    touched.insert(section);
                    continue;
                }
            }

            if let Ok(section) = path.parse::<Section>() {
                let Value::Object(data) = value else {
                    return Err(SettingsError::NotAnObject(path));
                };
                *working.section_mut(section) = data;
                touched.insert(section);
                continue;
            }

            if path == "version" {
                let Value::String(version) = value else {
                    return Err(SettingsError::Validation {
                        section: "document".to_string(),
                        field: path,
                        message: "must be a string".to_string(),
                    });
                };
                working.version = version;
                continue;
            }

            if strict {
                return Err(SettingsError::UnknownField(path));
            }
            ignored.push(path);
        }

        for section in &touched {
            section.validate(working.section(*section))?;
        }

        *self = working;

        Ok(PatchOutcome {
            touched: touched.into_iter().collect(),
            ignored,
        })
    }

    /// Applies a section update request.
    ///
    /// Merges into one section, or replaces several when targeting `all`.
    pub fn apply_update(&mut self, params: UpdateSectionParams) -> Result<(), SettingsError> {
        match params.target {
            SectionTarget::One(section) => self.merge_section(section, params.payload),
            SectionTarget::All => self.replace_sections(params.payload).map(|_| ()),
        }
    }

    /// Prepares the document for its next write: bumps the revision and stamps the time.
    pub fn advance(&mut self) {
        self.revision += 1;
        self.last_updated = Utc::now();
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> SettingsDto {
        SettingsDto {
            owner_id: self.owner_id,
            preferences: self.preferences,
            notifications: self.notifications,
            integrations: self.integrations,
            billing: self.billing,
            security: self.security,
            appearance: self.appearance,
            analytics: self.analytics,
            customization: self.customization,
            last_updated: self.last_updated,
            version: self.version,
            revision: self.revision,
        }
    }

    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SettingsDocument)` - The converted document
    /// - `Err(InternalError::CorruptSection)` - A stored section is not a JSON object
    pub fn from_entity(entity: entity::settings::Model) -> Result<Self, InternalError> {
        let owner_id = entity.owner_id;
        let section = |value: Value, column: &'static str| match value {
            Value::Object(map) => Ok(map),
            _ => Err(InternalError::CorruptSection {
                owner_id: owner_id.clone(),
                column,
            }),
        };

        Ok(Self {
            preferences: section(entity.preferences, "preferences")?,
            notifications: section(entity.notifications, "notifications")?,
            integrations: section(entity.integrations, "integrations")?,
            billing: section(entity.billing, "billing")?,
            security: section(entity.security, "security")?,
            appearance: section(entity.appearance, "appearance")?,
            analytics: section(entity.analytics, "analytics")?,
            customization: section(entity.customization, "customization")?,
            version: entity.version,
            revision: entity.revision,
            last_updated: entity.last_updated,
            owner_id,
        })
    }
}

/// Result of a field-path patch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatchOutcome {
    /// Sections that were written.
    pub touched: Vec<Section>,
    /// Paths that matched nothing and were skipped.
    pub ignored: Vec<String>,
}

/// Parameters for a section update, parsed from the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSectionParams {
    pub target: SectionTarget,
    pub payload: SectionData,
}

impl UpdateSectionParams {
    /// Parses a `{ section, data }` body.
    ///
    /// The payload is taken from `data`. When `data` is absent it falls back to the key
    /// named after the section, or for `all` to the remaining top-level keys.
    ///
    /// # Returns
    /// - `Ok(UpdateSectionParams)` - Parsed target and payload
    /// - `Err(SettingsError::MissingSection)` - No `section` key
    /// - `Err(SettingsError::InvalidSection)` - Unknown section name
    /// - `Err(SettingsError::MissingData)` - No payload for the section
    /// - `Err(SettingsError::NotAnObject)` - Payload is not an object
    pub fn from_body(mut body: Map<String, Value>) -> Result<Self, SettingsError> {
        let target = match body.remove("section") {
            None | Some(Value::Null) => return Err(SettingsError::MissingSection),
            Some(Value::String(name)) => name.parse::<SectionTarget>()?,
            Some(other) => return Err(SettingsError::InvalidSection(other.to_string())),
        };

        let payload = match body.remove("data") {
            Some(Value::Object(data)) => data,
            Some(_) => return Err(SettingsError::NotAnObject("data".to_string())),
            None => match target {
                SectionTarget::One(section) => match body.remove(section.as_str()) {
                    Some(Value::Object(data)) => data,
                    Some(_) => return Err(SettingsError::NotAnObject(section.to_string())),
                    None => return Err(SettingsError::MissingData),
                },
                SectionTarget::All => body,
            },
        };

        Ok(Self { target, payload })
    }
}
