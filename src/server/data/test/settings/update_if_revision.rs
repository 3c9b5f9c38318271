use super::*;

/// Tests a write whose expected revision matches the stored one.
///
/// Expected: Ok(true) and every document column overwritten
#[tokio::test]
async fn writes_when_revision_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = SettingsRepository::new(db);

    factory::settings::SettingsFactory::new(db, "owner-1")
        .revision(2)
        .build()
        .await?;

    let mut document = SettingsDocument::defaults("owner-1");
    document.revision = 3;

    let written = repo.update_if_revision(&document, 2).await?;

    assert!(written);
    let row = repo.find_by_owner("owner-1").await?.unwrap();
    assert_eq!(row.revision, 3);
    assert_eq!(row.security["maxLoginAttempts"], json!(5));

    Ok(())
}

/// Tests a write based on a stale revision.
///
/// Expected: Ok(false) and the stored row unchanged
#[tokio::test]
async fn skips_when_revision_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = SettingsRepository::new(db);

    factory::settings::SettingsFactory::new(db, "owner-1")
        .revision(5)
        .build()
        .await?;

    let mut document = SettingsDocument::defaults("owner-1");
    document.revision = 5;

    let written = repo.update_if_revision(&document, 4).await?;

    assert!(!written);
    let row = repo.find_by_owner("owner-1").await?.unwrap();
    assert_eq!(row.revision, 5);
    assert_eq!(row.security, json!({}));

    Ok(())
}

/// Tests a conditional write for an owner with no row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_when_row_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let written = SettingsRepository::new(db)
        .update_if_revision(&SettingsDocument::defaults("owner-1"), 1)
        .await?;

    assert!(!written);

    Ok(())
}
