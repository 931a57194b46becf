use super::*;
use test_utils::factory::package::PackageFactory;

/// Tests filtering packages by destination while hiding inactive ones.
///
/// Expected: only the active package of the requested destination
#[tokio::test]
async fn filters_by_destination_and_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dubai = factory::create_destination(db).await?;
    let paris = factory::create_destination(db).await?;
    let visible = factory::create_package(db, dubai.id).await?;
    PackageFactory::new(db, dubai.id).active(false).build().await?;
    factory::create_package(db, paris.id).await?;

    let repo = PackageRepository::new(db);
    let result = repo
        .get_all(ProductFilter {
            destination_id: Some(dubai.id),
            featured: None,
            active_only: true,
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, visible.id);

    Ok(())
}

/// Tests that featured packages are listed first.
///
/// Expected: featured package before a newer regular one
#[tokio::test]
async fn lists_featured_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let featured = PackageFactory::new(db, destination.id)
        .featured(true)
        .build()
        .await?;
    factory::create_package(db, destination.id).await?;

    let repo = PackageRepository::new(db);
    let result = repo.get_all(ProductFilter::default()).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, featured.id);

    Ok(())
}
