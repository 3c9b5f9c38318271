use super::*;

/// Tests that reset discards customization and keeps the revision counting up.
///
/// Expected: default sections, revision greater than before
#[tokio::test]
async fn restores_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let customized = service
        .update_section(
            "owner-1",
            update(Section::Preferences, json!({ "theme": "dark", "extra": 1 })),
            None,
        )
        .await?;

    let reset = service.reset("owner-1").await?;

    assert!(reset.same_sections(&SettingsDocument::defaults("owner-1")));
    assert!(reset.preferences.get("extra").is_none());
    assert_eq!(reset.revision, customized.revision + 1);

    let reloaded = service.get_or_create("owner-1").await?;
    assert!(reloaded.same_sections(&reset));
    assert_eq!(reloaded.revision, reset.revision);

    Ok(())
}

/// Tests reset for an owner with no document.
///
/// Expected: default document stored and returned
#[tokio::test]
async fn creates_document_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reset = SettingsService::new(db, PERMISSIVE).reset("owner-1").await?;

    assert!(reset.same_sections(&SettingsDocument::defaults("owner-1")));
    let stored = SettingsService::new(db, PERMISSIVE).get_or_create("owner-1").await?;
    assert_eq!(stored.revision, reset.revision);

    Ok(())
}

/// Tests that an `If-Match` taken before a reset is stale afterwards.
///
/// Expected: Err(SettingsError::RevisionMismatch)
#[tokio::test]
async fn invalidates_earlier_revisions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let before = service.get_or_create("owner-1").await?;
    service.reset("owner-1").await?;

    let result = service
        .update_section(
            "owner-1",
            update(Section::Security, json!({ "twoFactorAuth": true })),
            Some(before.revision),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::RevisionMismatch { .. }))
    ));

    Ok(())
}
