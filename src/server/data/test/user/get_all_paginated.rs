use super::*;

/// Tests paginating users ordered by username.
///
/// Expected: page sizes respected and total reflects every user
#[tokio::test]
async fn paginates_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    for name in ["charlie", "alice", "bob"] {
        repo.create(new_user(name, UserRole::User)).await?;
    }

    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    let (second_page, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
        vec!["alice", "bob"]
    );
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].username, "charlie");

    Ok(())
}
