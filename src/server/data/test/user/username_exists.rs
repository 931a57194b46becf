use super::*;

/// Tests that the excluded user does not count as a conflict for its own name.
///
/// Expected: true for other users, false when excluding the owner
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("amira")
        .email("amira@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_exists("amira", None).await?);
    assert!(!repo.username_exists("amira", Some(user.id)).await?);
    assert!(!repo.username_exists("omar", None).await?);
    assert!(repo.email_exists("amira@example.com", None).await?);
    assert!(!repo.email_exists("amira@example.com", Some(user.id)).await?);

    Ok(())
}
