use super::*;

/// Tests that inactive menus are not served by location.
///
/// Expected: Some for the active header menu, None for the inactive footer menu
#[tokio::test]
async fn ignores_inactive_menu() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuRepository::new(db);
    let header = repo
        .create(SaveMenuParams {
            name: "Main".to_string(),
            location: "header".to_string(),
            active: true,
        })
        .await?;
    repo.create(SaveMenuParams {
        name: "Footer".to_string(),
        location: "footer".to_string(),
        active: false,
    })
    .await?;

    let found = repo.find_active_by_location("header").await?;

    assert_eq!(found.map(|menu| menu.id), Some(header.id));
    assert!(repo.find_active_by_location("footer").await?.is_none());

    Ok(())
}
