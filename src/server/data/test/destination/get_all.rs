use super::*;
use test_utils::factory::destination::DestinationFactory;

/// Tests that public listings hide inactive destinations.
///
/// Expected: only active destinations when `active_only` is set
#[tokio::test]
async fn active_only_hides_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_destination(db).await?;
    DestinationFactory::new(db).active(false).build().await?;

    let repo = DestinationRepository::new(db);
    let public = repo
        .get_all(DestinationFilter {
            featured: None,
            active_only: true,
        })
        .await?;
    let all = repo.get_all(DestinationFilter::default()).await?;

    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, active.id);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests filtering destinations by the featured flag.
///
/// Expected: only featured destinations returned
#[tokio::test]
async fn filters_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let featured = DestinationFactory::new(db).featured(true).build().await?;
    factory::create_destination(db).await?;

    let repo = DestinationRepository::new(db);
    let result = repo
        .get_all(DestinationFilter {
            featured: Some(true),
            active_only: true,
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, featured.id);

    Ok(())
}
