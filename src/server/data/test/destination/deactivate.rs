use super::*;

/// Tests soft deleting a destination.
///
/// Expected: Ok(true) and the row remains with `active = false`
#[tokio::test]
async fn deactivates_existing_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;

    let repo = DestinationRepository::new(db);
    let result = repo.deactivate(destination.id).await?;

    assert!(result);
    let stored = repo.find_by_id(destination.id).await?.unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Tests deactivating a destination that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DestinationRepository::new(db);

    assert!(!repo.deactivate(999).await?);

    Ok(())
}
