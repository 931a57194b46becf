use super::*;
use test_utils::factory::package::PackageFactory;

/// Tests slug lookups with and without an excluded package.
///
/// Expected: a package does not conflict with its own slug
#[tokio::test]
async fn excludes_own_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let package = PackageFactory::new(db, destination.id)
        .slug("petra-by-night")
        .build()
        .await?;

    let repo = PackageRepository::new(db);

    assert!(repo.slug_exists("petra-by-night", None).await?);
    assert!(!repo.slug_exists("petra-by-night", Some(package.id)).await?);
    assert!(!repo.slug_exists("wadi-rum", None).await?);

    Ok(())
}
