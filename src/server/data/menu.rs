//! Menu and menu item data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::menu::{Menu, MenuItem, SaveMenuItemParams, SaveMenuParams};

pub struct MenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveMenuParams) -> Result<Menu, DbErr> {
        let entity = entity::menu::ActiveModel {
            name: ActiveValue::Set(params.name),
            location: ActiveValue::Set(params.location),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Menu::from_entity(entity))
    }

    pub async fn update(&self, id: i32, params: SaveMenuParams) -> Result<Option<Menu>, DbErr> {
        let Some(existing) = entity::prelude::Menu::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::menu::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.location = ActiveValue::Set(params.location);
        active.active = ActiveValue::Set(params.active);

        let entity = active.update(self.db).await?;

        Ok(Some(Menu::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Menu>, DbErr> {
        let entity = entity::prelude::Menu::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Menu::from_entity))
    }

    /// Finds the active menu placed at `location`.
    pub async fn find_active_by_location(&self, location: &str) -> Result<Option<Menu>, DbErr> {
        let entity = entity::prelude::Menu::find()
            .filter(entity::menu::Column::Location.eq(location))
            .filter(entity::menu::Column::Active.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Menu::from_entity))
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Menu>, u64), DbErr> {
        let paginator = entity::prelude::Menu::find()
            .order_by_asc(entity::menu::Column::Location)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Menu::from_entity).collect(), total))
    }

    /// Deletes a menu; its items cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Menu::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the flat item list of a menu ordered by position.
    pub async fn get_items(&self, menu_id: i32) -> Result<Vec<MenuItem>, DbErr> {
        let entities = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::MenuId.eq(menu_id))
            .order_by_asc(entity::menu_item::Column::Position)
            .order_by_asc(entity::menu_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItem::from_entity).collect())
    }

    pub async fn find_item(&self, id: i32) -> Result<Option<MenuItem>, DbErr> {
        let entity = entity::prelude::MenuItem::find_by_id(id).one(self.db).await?;

        Ok(entity.map(MenuItem::from_entity))
    }

    pub async fn create_item(
        &self,
        menu_id: i32,
        params: SaveMenuItemParams,
    ) -> Result<MenuItem, DbErr> {
        let entity = entity::menu_item::ActiveModel {
            menu_id: ActiveValue::Set(menu_id),
            parent_id: ActiveValue::Set(params.parent_id),
            title: ActiveValue::Set(params.title),
            url: ActiveValue::Set(params.url),
            position: ActiveValue::Set(params.position),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuItem::from_entity(entity))
    }

    pub async fn update_item(
        &self,
        id: i32,
        params: SaveMenuItemParams,
    ) -> Result<Option<MenuItem>, DbErr> {
        let Some(existing) = entity::prelude::MenuItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::menu_item::ActiveModel = existing.into();
        active.parent_id = ActiveValue::Set(params.parent_id);
        active.title = ActiveValue::Set(params.title);
        active.url = ActiveValue::Set(params.url);
        active.position = ActiveValue::Set(params.position);

        let entity = active.update(self.db).await?;

        Ok(Some(MenuItem::from_entity(entity)))
    }

    /// Deletes an item and re-parents its children to the top level.
    pub async fn delete_item(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::MenuItem::update_many()
            .col_expr(
                entity::menu_item::Column::ParentId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .filter(entity::menu_item::Column::ParentId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::MenuItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
