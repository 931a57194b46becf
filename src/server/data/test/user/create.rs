use super::*;

/// Tests inserting a new user.
///
/// Expected: Ok with the stored fields returned
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(new_user("traveller", UserRole::User)).await?;

    assert_eq!(user.username, "traveller");
    assert_eq!(user.email, "traveller@example.com");
    assert_eq!(user.role, UserRole::User);

    let found = repo.find_by_username("traveller").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that usernames are unique at the database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("traveller", UserRole::User)).await?;

    let mut duplicate = new_user("traveller", UserRole::User);
    duplicate.email = "other@example.com".to_string();
    let result = repo.create(duplicate).await;

    assert!(result.is_err());

    Ok(())
}
