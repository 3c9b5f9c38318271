use super::*;

/// Tests upserting when the owner has no row yet.
///
/// Expected: Ok(Model) matching the document
#[tokio::test]
async fn inserts_new_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let document = SettingsDocument::defaults("owner-1");
    let row = SettingsRepository::new(db).upsert(&document).await?;

    assert_eq!(row.owner_id, "owner-1");
    assert_eq!(row.revision, document.revision);
    assert_eq!(row.billing["invoicePrefix"], json!("INV"));

    Ok(())
}

/// Tests that upserting replaces an existing row wholesale.
///
/// Expected: Ok(Model) with the new sections and revision
#[tokio::test]
async fn overwrites_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::settings::SettingsFactory::new(db, "owner-1")
        .section("appearance", json!({ "fontSize": "large", "legacy": true }))
        .revision(7)
        .build()
        .await?;

    let mut document = SettingsDocument::defaults("owner-1");
    document.revision = 8;
    let row = SettingsRepository::new(db).upsert(&document).await?;

    assert_eq!(row.revision, 8);
    assert_eq!(row.appearance["fontSize"], json!("medium"));
    assert!(row.appearance.get("legacy").is_none());

    Ok(())
}
