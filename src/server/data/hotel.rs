//! Hotel data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::hotel::{Hotel, HotelFilter, SaveHotelParams};
use crate::server::util::json::string_list_value;

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveHotelParams) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            destination_id: ActiveValue::Set(params.destination_id),
            city_id: ActiveValue::Set(params.city_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            address: ActiveValue::Set(params.address),
            stars: ActiveValue::Set(params.stars),
            base_price: ActiveValue::Set(params.base_price),
            image_url: ActiveValue::Set(params.image_url),
            gallery: ActiveValue::Set(string_list_value(&params.gallery)),
            amenities: ActiveValue::Set(string_list_value(&params.amenities)),
            featured: ActiveValue::Set(params.featured),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    pub async fn update(&self, id: i32, params: SaveHotelParams) -> Result<Option<Hotel>, DbErr> {
        let Some(existing) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::hotel::ActiveModel = existing.into();
        active.destination_id = ActiveValue::Set(params.destination_id);
        active.city_id = ActiveValue::Set(params.city_id);
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.address = ActiveValue::Set(params.address);
        active.stars = ActiveValue::Set(params.stars);
        active.base_price = ActiveValue::Set(params.base_price);
        active.image_url = ActiveValue::Set(params.image_url);
        active.gallery = ActiveValue::Set(string_list_value(&params.gallery));
        active.amenities = ActiveValue::Set(string_list_value(&params.amenities));
        active.featured = ActiveValue::Set(params.featured);
        active.active = ActiveValue::Set(params.active);

        let entity = active.update(self.db).await?;

        Ok(Some(Hotel::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Lists hotels matching the filter, featured first then by stars descending.
    pub async fn get_all(&self, filter: HotelFilter) -> Result<Vec<Hotel>, DbErr> {
        let entities = entity::prelude::Hotel::find()
            .apply_if(filter.destination_id, |query, id| {
                query.filter(entity::hotel::Column::DestinationId.eq(id))
            })
            .apply_if(filter.city_id, |query, id| {
                query.filter(entity::hotel::Column::CityId.eq(id))
            })
            .apply_if(filter.featured, |query, featured| {
                query.filter(entity::hotel::Column::Featured.eq(featured))
            })
            .apply_if(filter.active_only.then_some(true), |query, active| {
                query.filter(entity::hotel::Column::Active.eq(active))
            })
            .order_by_desc(entity::hotel::Column::Featured)
            .order_by_desc(entity::hotel::Column::Stars)
            .order_by_asc(entity::hotel::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Hotel>, u64), DbErr> {
        let paginator = entity::prelude::Hotel::find()
            .order_by_desc(entity::hotel::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Hotel::from_entity).collect(), total))
    }

    /// Counts how many of the given hotel IDs exist, used to validate package links.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Id.is_in(ids.to_vec()))
            .count(self.db)
            .await
    }

    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Hotel::update_many()
            .col_expr(
                entity::hotel::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::hotel::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Hotel::find().count(self.db).await
    }
}
