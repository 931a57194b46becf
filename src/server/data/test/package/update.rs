use super::*;

/// Tests that updating a package replaces its hotel links.
///
/// Expected: only the newly listed hotel remains linked
#[tokio::test]
async fn replaces_hotel_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let old_hotel = factory::create_hotel(db).await?;
    let new_hotel = factory::create_hotel(db).await?;

    let repo = PackageRepository::new(db);
    let package = repo
        .create("nile".to_string(), &params(destination.id, vec![old_hotel.id]))
        .await?;

    let mut changed = params(destination.id, vec![new_hotel.id]);
    changed.title = "Nile Cruise".to_string();
    let updated = repo
        .update(package.id, "nile-cruise".to_string(), &changed)
        .await?
        .unwrap();

    assert_eq!(updated.title, "Nile Cruise");
    assert_eq!(updated.slug, "nile-cruise");

    let hotels = repo.get_hotels(package.id, false).await?;
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, new_hotel.id);

    Ok(())
}

/// Tests updating a package that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_package() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;

    let repo = PackageRepository::new(db);
    let result = repo
        .update(999, "ghost".to_string(), &params(destination.id, vec![]))
        .await?;

    assert!(result.is_none());

    Ok(())
}
