use super::*;

/// Tests inserting and then overwriting settings by key.
///
/// Expected: changed keys overwritten and untouched keys kept
#[tokio::test]
async fn inserts_then_overwrites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert(BTreeMap::from([
        ("site_name".to_string(), "Tripdesk".to_string()),
        ("currency".to_string(), "USD".to_string()),
    ]))
    .await?;
    repo.upsert(BTreeMap::from([("currency".to_string(), "AED".to_string())]))
        .await?;

    let settings = repo.get_all().await?;

    assert_eq!(settings.len(), 2);
    assert_eq!(settings.get("site_name").map(String::as_str), Some("Tripdesk"));
    assert_eq!(settings.get("currency").map(String::as_str), Some("AED"));

    Ok(())
}
