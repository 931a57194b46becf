use super::*;

/// Tests creating a package with linked hotels.
///
/// Expected: JSON columns round-trip and the hotels are linked
#[tokio::test]
async fn creates_package_with_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let first = factory::create_hotel(db).await?;
    let second = factory::create_hotel(db).await?;

    let repo = PackageRepository::new(db);
    let package = repo
        .create(
            "cairo-highlights".to_string(),
            &params(destination.id, vec![first.id, second.id]),
        )
        .await?;

    assert_eq!(package.slug, "cairo-highlights");
    assert_eq!(package.gallery, vec!["/uploads/pyramids.jpg".to_string()]);
    assert_eq!(package.itinerary.len(), 1);
    assert_eq!(package.itinerary[0].title, "Arrival");
    assert_eq!(package.included, vec!["Breakfast".to_string()]);

    let hotels = repo.get_hotels(package.id, false).await?;
    assert_eq!(hotels.len(), 2);

    Ok(())
}

/// Tests that slugs are unique.
///
/// Expected: Err on the duplicate slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;

    let repo = PackageRepository::new(db);
    repo.create("cairo".to_string(), &params(destination.id, vec![]))
        .await?;
    let result = repo
        .create("cairo".to_string(), &params(destination.id, vec![]))
        .await;

    assert!(result.is_err());

    Ok(())
}
