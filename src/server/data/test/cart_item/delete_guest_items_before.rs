use super::*;
use chrono::{Duration, Utc};

/// Tests pruning stale guest lines.
///
/// Expected: only guest lines older than the cutoff are deleted
#[tokio::test]
async fn deletes_only_stale_guest_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let user = factory::create_user(db).await?;
    CartItemFactory::for_guest(db, "stale")
        .created_at(now - Duration::days(45))
        .build()
        .await?;
    CartItemFactory::for_guest(db, "fresh")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    CartItemFactory::for_user(db, user.id)
        .created_at(now - Duration::days(90))
        .build()
        .await?;

    let repo = CartItemRepository::new(db);
    let deleted = repo
        .delete_guest_items_before(now - Duration::days(30))
        .await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .get_by_owner(&CartOwner::Guest("stale".to_string()))
        .await?
        .is_empty());
    assert_eq!(
        repo.get_by_owner(&CartOwner::Guest("fresh".to_string()))
            .await?
            .len(),
        1
    );
    assert_eq!(repo.get_by_owner(&CartOwner::User(user.id)).await?.len(), 1);

    Ok(())
}
