use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu::MenuRepository,
    error::AppError,
    model::{
        menu::{Menu, MenuItem, MenuWithItems, SaveMenuItemParams, SaveMenuParams},
        pagination::{PageParams, Paginated},
    },
};

/// Navigation menus and their nested items.
pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the active menu at a location with its item tree.
    pub async fn get_by_location(&self, location: &str) -> Result<Option<MenuWithItems>, AppError> {
        let repo = MenuRepository::new(self.db);

        let Some(menu) = repo
            .find_active_by_location(&location.trim().to_lowercase())
            .await?
        else {
            return Ok(None);
        };
        let items = repo.get_items(menu.id).await?;

        Ok(Some(MenuWithItems::build(menu, items)))
    }

    /// Gets any menu, active or not, with its item tree.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MenuWithItems>, AppError> {
        let repo = MenuRepository::new(self.db);

        let Some(menu) = repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let items = repo.get_items(menu.id).await?;

        Ok(Some(MenuWithItems::build(menu, items)))
    }

    pub async fn get_paginated(&self, page: PageParams) -> Result<Paginated<Menu>, AppError> {
        let (menus, total) = MenuRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(menus, total, page))
    }

    pub async fn create(&self, params: SaveMenuParams) -> Result<Menu, AppError> {
        Ok(MenuRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: SaveMenuParams) -> Result<Option<Menu>, AppError> {
        Ok(MenuRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(MenuRepository::new(self.db).delete(id).await?)
    }

    /// Adds an item to a menu. Returns None if the menu doesn't exist.
    pub async fn create_item(
        &self,
        menu_id: i32,
        params: SaveMenuItemParams,
    ) -> Result<Option<MenuItem>, AppError> {
        let repo = MenuRepository::new(self.db);

        if repo.find_by_id(menu_id).await?.is_none() {
            return Ok(None);
        }
        self.ensure_parent(menu_id, None, params.parent_id).await?;

        Ok(Some(repo.create_item(menu_id, params).await?))
    }

    /// Updates an item, keeping it in its menu. Returns None if the item doesn't exist.
    pub async fn update_item(
        &self,
        id: i32,
        params: SaveMenuItemParams,
    ) -> Result<Option<MenuItem>, AppError> {
        let repo = MenuRepository::new(self.db);

        let Some(existing) = repo.find_item(id).await? else {
            return Ok(None);
        };
        self.ensure_parent(existing.menu_id, Some(id), params.parent_id)
            .await?;

        Ok(repo.update_item(id, params).await?)
    }

    /// Deletes an item; its children move to the top level.
    pub async fn delete_item(&self, id: i32) -> Result<bool, AppError> {
        Ok(MenuRepository::new(self.db).delete_item(id).await?)
    }

    /// A parent must be another item of the same menu and must not sit below `item_id`.
    async fn ensure_parent(
        &self,
        menu_id: i32,
        item_id: Option<i32>,
        parent_id: Option<i32>,
    ) -> Result<(), AppError> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };

        if item_id == Some(parent_id) {
            return Err(AppError::BadRequest(
                "A menu item cannot be its own parent".to_string(),
            ));
        }

        let parents: HashMap<i32, Option<i32>> = MenuRepository::new(self.db)
            .get_items(menu_id)
            .await?
            .into_iter()
            .map(|item| (item.id, item.parent_id))
            .collect();

        if !parents.contains_key(&parent_id) {
            return Err(AppError::BadRequest(format!(
                "Parent item {} does not belong to this menu",
                parent_id
            )));
        }

        let Some(item_id) = item_id else {
            return Ok(());
        };

        let mut visited = HashSet::new();
        let mut current = Some(parent_id);
        while let Some(id) = current {
            if id == item_id {
                return Err(AppError::BadRequest(
                    "A menu item cannot be nested below itself".to_string(),
                ));
            }
            if !visited.insert(id) {
                break;
            }
            current = parents.get(&id).copied().flatten();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn item(title: &str, parent_id: Option<i32>, position: i32) -> SaveMenuItemParams {
        SaveMenuItemParams {
            parent_id,
            title: title.to_string(),
            url: format!("/{}", title.to_lowercase()),
            position,
        }
    }

    /// Tests building the public menu tree for a location.
    ///
    /// Expected: top-level items ordered by position with children nested
    #[tokio::test]
    async fn builds_tree_for_location() -> Result<(), AppError> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = MenuService::new(db);
        let menu = service
            .create(SaveMenuParams {
                name: "Header".to_string(),
                location: "header".to_string(),
                active: true,
            })
            .await?;
        let tours = service
            .create_item(menu.id, item("Tours", None, 2))
            .await?
            .unwrap();
        service.create_item(menu.id, item("Home", None, 1)).await?;
        service
            .create_item(menu.id, item("Desert", Some(tours.id), 0))
            .await?;

        let tree = service.get_by_location("Header").await?.unwrap();

        let titles: Vec<&str> = tree.items.iter().map(|n| n.item.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "Tours"]);
        assert_eq!(tree.items[1].children.len(), 1);

        Ok(())
    }

    /// Tests that a parent from another menu is rejected.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_foreign_parent() -> Result<(), AppError> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = MenuService::new(db);
        let header = service
            .create(SaveMenuParams {
                name: "Header".to_string(),
                location: "header".to_string(),
                active: true,
            })
            .await?;
        let footer = service
            .create(SaveMenuParams {
                name: "Footer".to_string(),
                location: "footer".to_string(),
                active: true,
            })
            .await?;
        let foreign = service
            .create_item(footer.id, item("About", None, 0))
            .await?
            .unwrap();

        let result = service
            .create_item(header.id, item("Child", Some(foreign.id), 0))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests re-parenting an item below one of its own descendants.
    ///
    /// Expected: Err(AppError::BadRequest) and the tree keeps both items
    #[tokio::test]
    async fn rejects_parent_cycle() -> Result<(), AppError> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = MenuService::new(db);
        let menu = service
            .create(SaveMenuParams {
                name: "Header".to_string(),
                location: "header".to_string(),
                active: true,
            })
            .await?;
        let tours = service
            .create_item(menu.id, item("Tours", None, 0))
            .await?
            .unwrap();
        let desert = service
            .create_item(menu.id, item("Desert", Some(tours.id), 0))
            .await?
            .unwrap();

        let result = service
            .update_item(tours.id, item("Tours", Some(desert.id), 0))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let tree = service.get_by_location("header").await?.unwrap();
        assert_eq!(tree.items.len(), 1);
        assert_eq!(tree.items[0].children.len(), 1);

        Ok(())
    }
}
