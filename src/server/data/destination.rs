//! Destination data repository.
//!
//! Destinations are soft-deleted: `deactivate` clears the `active` flag so packages, tours
//! and hotels that reference them keep their foreign keys intact.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::destination::{Destination, DestinationFilter, SaveDestinationParams};

pub struct DestinationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveDestinationParams) -> Result<Destination, DbErr> {
        let entity = entity::destination::ActiveModel {
            name: ActiveValue::Set(params.name),
            country_id: ActiveValue::Set(params.country_id),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            featured: ActiveValue::Set(params.featured),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Destination::from_entity(entity))
    }

    /// Replaces all editable fields of a destination.
    ///
    /// # Returns
    /// - `Ok(Some(Destination))` - Updated destination
    /// - `Ok(None)` - No destination with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: SaveDestinationParams,
    ) -> Result<Option<Destination>, DbErr> {
        let Some(existing) = entity::prelude::Destination::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::destination::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.country_id = ActiveValue::Set(params.country_id);
        active.description = ActiveValue::Set(params.description);
        active.image_url = ActiveValue::Set(params.image_url);
        active.featured = ActiveValue::Set(params.featured);
        active.active = ActiveValue::Set(params.active);

        let entity = active.update(self.db).await?;

        Ok(Some(Destination::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Destination>, DbErr> {
        let entity = entity::prelude::Destination::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Destination::from_entity))
    }

    /// Lists destinations matching the filter, ordered by name.
    pub async fn get_all(&self, filter: DestinationFilter) -> Result<Vec<Destination>, DbErr> {
        let entities = Self::filtered(filter)
            .order_by_asc(entity::destination::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Destination::from_entity).collect())
    }

    /// Gets destinations with pagination for the admin listing, newest first.
    ///
    /// # Returns
    /// - `Ok((destinations, total))` - Destinations for the requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Destination>, u64), DbErr> {
        let paginator = entity::prelude::Destination::find()
            .order_by_desc(entity::destination::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Destination::from_entity).collect(),
            total,
        ))
    }

    /// Marks a destination inactive.
    ///
    /// # Returns
    /// - `Ok(true)` - Destination existed and was deactivated
    /// - `Ok(false)` - No destination with that ID
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Destination::update_many()
            .col_expr(
                entity::destination::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::destination::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Destination::find().count(self.db).await
    }

    fn filtered(filter: DestinationFilter) -> sea_orm::Select<entity::destination::Entity> {
        entity::prelude::Destination::find()
            .apply_if(filter.featured, |query, featured| {
                query.filter(entity::destination::Column::Featured.eq(featured))
            })
            .apply_if(filter.active_only.then_some(true), |query, active| {
                query.filter(entity::destination::Column::Active.eq(active))
            })
    }
}
