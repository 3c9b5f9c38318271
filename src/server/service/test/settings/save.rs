use super::*;
use crate::server::data::settings::SettingsRepository;

/// Tests a write whose stored revision moved on after the document was read.
///
/// Expected: Err(SettingsError::WriteConflict) and the other writer's change kept
#[tokio::test]
async fn fails_when_row_changed_after_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let read = service.get_or_create("owner-1").await?;

    let mut concurrent = read.clone();
    concurrent.billing.insert("paymentTerms".to_string(), json!(90));
    concurrent.revision = read.revision + 1;
    let written = SettingsRepository::new(db)
        .update_if_revision(&concurrent, read.revision)
        .await?;
    assert!(written);

    let mut mine = read.clone();
    mine.billing.insert("paymentTerms".to_string(), json!(15));
    let result = service.save(mine).await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::WriteConflict))
    ));
    let stored = service.get_or_create("owner-1").await?;
    assert_eq!(stored.revision, concurrent.revision);
    assert_eq!(stored.billing["paymentTerms"], json!(90));

    Ok(())
}

/// Tests a write whose stored revision is unchanged since the read.
///
/// Expected: Ok(SettingsDocument) one revision ahead and persisted
#[tokio::test]
async fn writes_when_row_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SettingsService::new(db, PERMISSIVE);

    let mut read = service.get_or_create("owner-1").await?;
    let read_revision = read.revision;
    read.billing.insert("paymentTerms".to_string(), json!(15));

    let saved = service.save(read).await?;

    assert_eq!(saved.revision, read_revision + 1);
    let stored = service.get_or_create("owner-1").await?;
    assert_eq!(stored.billing["paymentTerms"], json!(15));

    Ok(())
}
