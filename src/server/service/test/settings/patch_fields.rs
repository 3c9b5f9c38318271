use super::*;

/// Tests patching a single field by dotted path.
///
/// Expected: only `security.maxLoginAttempts` changes
#[tokio::test]
async fn patches_single_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let before = service.get_or_create("owner-1").await?;
    let after = service
        .patch_fields(
            "owner-1",
            object(json!({ "security.maxLoginAttempts": 3 })),
            None,
        )
        .await?;

    assert_eq!(after.security["maxLoginAttempts"], json!(3));
    assert_eq!(after.security["sessionTimeout"], json!(30));
    assert_eq!(after.preferences, before.preferences);
    assert_eq!(after.revision, before.revision + 1);

    Ok(())
}

/// Tests that unknown paths are skipped when strict patching is off.
///
/// Expected: known paths applied, unknown and protected paths ignored
#[tokio::test]
async fn ignores_unknown_paths_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let before = service.get_or_create("owner-1").await?;
    let after = service
        .patch_fields(
            "owner-1",
            object(json!({
                "nope.x": 1,
                "ownerId": "someone-else",
                "revision": 99,
                "preferences.currency": "EUR"
            })),
            None,
        )
        .await?;

    assert_eq!(after.owner_id, "owner-1");
    assert_eq!(after.revision, before.revision + 1);
    assert_eq!(after.preferences["currency"], json!("EUR"));

    Ok(())
}

/// Tests that unknown paths fail the whole patch when strict patching is on.
///
/// Expected: Err(SettingsError::UnknownField) and nothing written
#[tokio::test]
async fn rejects_unknown_paths_when_strict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, STRICT);

    let before = service.get_or_create("owner-1").await?;
    let result = service
        .patch_fields(
            "owner-1",
            object(json!({ "nope.x": 1, "preferences.currency": "EUR" })),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::UnknownField(ref path))) if path == "nope.x"
    ));
    let after = service.get_or_create("owner-1").await?;
    assert!(after.same_sections(&before));

    Ok(())
}

/// Tests replacing a whole section and the version through top-level paths.
///
/// Expected: section replaced wholesale, version updated
#[tokio::test]
async fn assigns_top_level_keys() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let after = service
        .patch_fields(
            "owner-1",
            object(json!({
                "integrations": { "apiAccess": true },
                "version": "1.1.0"
            })),
            None,
        )
        .await?;

    assert_eq!(after.integrations, object(json!({ "apiAccess": true })));
    assert_eq!(after.version, "1.1.0");

    Ok(())
}

/// Tests that a patched value breaking its schema is rejected.
///
/// Expected: Err(SettingsError::Validation)
#[tokio::test]
async fn validates_patched_sections() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let result = service
        .patch_fields(
            "owner-1",
            object(json!({ "preferences.theme": "neon" })),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::Validation { .. }))
    ));

    Ok(())
}

/// Tests an empty patch.
///
/// Expected: Err(SettingsError::EmptyPatch) without creating a document
#[tokio::test]
async fn rejects_empty_patch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let result = service.patch_fields("owner-1", Map::new(), None).await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::EmptyPatch))
    ));
    let stored = crate::server::data::settings::SettingsRepository::new(db)
        .find_by_owner("owner-1")
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests a patch carrying a stale `If-Match` revision.
///
/// Expected: Err(SettingsError::RevisionMismatch)
#[tokio::test]
async fn rejects_stale_revision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::SettingsFactory::new(db, "owner-1")
        .revision(4)
        .build()
        .await?;

    let result = SettingsService::new(db, PERMISSIVE)
        .patch_fields(
            "owner-1",
            object(json!({ "appearance.compactMode": true })),
            Some(3),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::RevisionMismatch {
            expected: 3,
            current: 4
        }))
    ));

    Ok(())
}
