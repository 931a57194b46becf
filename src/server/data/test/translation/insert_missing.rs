use super::*;

/// Tests that scanning never overwrites an existing translation.
///
/// Expected: new keys inserted, existing text preserved
#[tokio::test]
async fn keeps_existing_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_translation(db, "nav.home", "Home page", Some("الرئيسية".to_string())).await?;

    let repo = TranslationRepository::new(db);
    repo.insert_missing(vec![
        ("nav.home".to_string(), "Home".to_string()),
        ("nav.tours".to_string(), "Tours".to_string()),
    ])
    .await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].key, "nav.home");
    assert_eq!(all[0].en_text, "Home page");
    assert_eq!(all[1].key, "nav.tours");
    assert!(all[1].ar_text.is_none());

    let keys = repo.existing_keys().await?;
    assert!(keys.contains("nav.tours"));

    Ok(())
}

/// Tests inserting nothing.
///
/// Expected: Ok without touching the table
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TranslationRepository::new(db);
    repo.insert_missing(Vec::new()).await?;

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
