use super::*;

/// Tests inserting defaults for an owner without settings.
///
/// Expected: Ok(true) and the row is readable afterwards
#[tokio::test]
async fn inserts_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = SettingsRepository::new(db);

    let document = SettingsDocument::defaults("owner-1");
    let inserted = repo.insert_if_absent(&document).await?;

    assert!(inserted);
    let row = repo.find_by_owner("owner-1").await?.unwrap();
    assert_eq!(row.revision, document.revision);
    assert_eq!(row.version, document.version);
    assert_eq!(row.preferences["theme"], json!("light"));

    Ok(())
}

/// Tests that an existing row is left alone.
///
/// Simulates the losing side of a creation race.
///
/// Expected: Ok(false) and the stored row keeps its contents
#[tokio::test]
async fn keeps_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = SettingsRepository::new(db);

    factory::settings::SettingsFactory::new(db, "owner-1")
        .section("preferences", json!({ "theme": "dark" }))
        .revision(3)
        .build()
        .await?;

    let inserted = repo
        .insert_if_absent(&SettingsDocument::defaults("owner-1"))
        .await?;

    assert!(!inserted);
    let row = repo.find_by_owner("owner-1").await?.unwrap();
    assert_eq!(row.preferences, json!({ "theme": "dark" }));
    assert_eq!(row.revision, 3);

    Ok(())
}
