use super::*;

/// Tests that deleting a parent item promotes its children.
///
/// Expected: child remains with no parent
#[tokio::test]
async fn promotes_children_of_deleted_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuRepository::new(db);
    let menu = repo
        .create(SaveMenuParams {
            name: "Main".to_string(),
            location: "header".to_string(),
            active: true,
        })
        .await?;
    let parent = repo.create_item(menu.id, item(None, "Explore", 0)).await?;
    let child = repo
        .create_item(menu.id, item(Some(parent.id), "Tours", 0))
        .await?;

    assert!(repo.delete_item(parent.id).await?);

    let items = repo.get_items(menu.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, child.id);
    assert_eq!(items[0].parent_id, None);

    Ok(())
}
