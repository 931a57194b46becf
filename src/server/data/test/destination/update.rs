use super::*;

/// Tests replacing the editable fields of a destination.
///
/// Expected: Ok(Some) with new values, Ok(None) for a missing id
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let params = SaveDestinationParams {
        name: "Istanbul".to_string(),
        country_id: None,
        description: Some("Where two continents meet".to_string()),
        image_url: None,
        featured: true,
        active: true,
    };

    let repo = DestinationRepository::new(db);
    let updated = repo.update(destination.id, params.clone()).await?.unwrap();

    assert_eq!(updated.name, "Istanbul");
    assert!(updated.featured);

    assert!(repo.update(999, params).await?.is_none());

    Ok(())
}
