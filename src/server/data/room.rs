//! Room data repository. Rooms belong to a hotel and are hard-deleted.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::hotel::{Room, SaveRoomParams};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, hotel_id: i32, params: SaveRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(hotel_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            max_adults: ActiveValue::Set(params.max_adults),
            max_children: ActiveValue::Set(params.max_children),
            price: ActiveValue::Set(params.price),
            available: ActiveValue::Set(params.available),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    pub async fn update(&self, id: i32, params: SaveRoomParams) -> Result<Option<Room>, DbErr> {
        let Some(existing) = entity::prelude::Room::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.max_adults = ActiveValue::Set(params.max_adults);
        active.max_children = ActiveValue::Set(params.max_children);
        active.price = ActiveValue::Set(params.price);
        active.available = ActiveValue::Set(params.available);
        active.image_url = ActiveValue::Set(params.image_url);

        let entity = active.update(self.db).await?;

        Ok(Some(Room::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets the rooms of a hotel ordered by price, cheapest first.
    pub async fn get_by_hotel(
        &self,
        hotel_id: i32,
        available_only: bool,
    ) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .apply_if(available_only.then_some(true), |query, available| {
                query.filter(entity::room::Column::Available.eq(available))
            })
            .order_by_asc(entity::room::Column::Price)
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
