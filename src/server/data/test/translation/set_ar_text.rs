use super::*;

/// Tests storing a machine translation.
///
/// Expected: Arabic text saved, missing ids return None
#[tokio::test]
async fn stores_arabic_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = create_translation(db, "cart.empty", "Your cart is empty", None).await?;

    let repo = TranslationRepository::new(db);
    let updated = repo
        .set_ar_text(entry.id, "سلة التسوق فارغة".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.ar_text.as_deref(), Some("سلة التسوق فارغة"));
    assert!(repo.set_ar_text(999, "x".to_string()).await?.is_none());

    Ok(())
}
