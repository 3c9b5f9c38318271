use super::*;

/// Tests loading a stored settings row.
///
/// Expected: Ok(Some(Model)) with the stored section contents
#[tokio::test]
async fn finds_stored_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::SettingsFactory::new(db, "owner-1")
        .section("security", json!({ "sessionTimeout": 60 }))
        .revision(4)
        .build()
        .await?;

    let row = SettingsRepository::new(db).find_by_owner("owner-1").await?;

    let row = row.expect("settings should exist");
    assert_eq!(row.security, json!({ "sessionTimeout": 60 }));
    assert_eq!(row.revision, 4);

    Ok(())
}

/// Tests that rows of other owners are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_settings(db, "owner-1").await?;

    let row = SettingsRepository::new(db).find_by_owner("owner-2").await?;

    assert!(row.is_none());

    Ok(())
}
