use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hotel::HotelRepository, room::RoomRepository},
    error::AppError,
    model::{
        hotel::{Hotel, HotelFilter, Room, SaveHotelParams, SaveRoomParams},
        pagination::{PageParams, Paginated},
    },
};

/// Hotels and the rooms they offer.
pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, filter: HotelFilter) -> Result<Vec<Hotel>, AppError> {
        Ok(HotelRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_paginated(&self, page: PageParams) -> Result<Paginated<Hotel>, AppError> {
        let (hotels, total) = HotelRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(hotels, total, page))
    }

    pub async fn get_by_id(&self, id: i32, active_only: bool) -> Result<Option<Hotel>, AppError> {
        let hotel = HotelRepository::new(self.db).find_by_id(id).await?;

        Ok(hotel.filter(|h| h.active || !active_only))
    }

    pub async fn create(&self, params: SaveHotelParams) -> Result<Hotel, AppError> {
        Ok(HotelRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveHotelParams,
    ) -> Result<Option<Hotel>, AppError> {
        Ok(HotelRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(HotelRepository::new(self.db).deactivate(id).await?)
    }

    /// Lists a hotel's rooms.
    ///
    /// Public callers (`public` set) only see available rooms of active hotels.
    /// Returns None if the hotel doesn't exist or is hidden.
    pub async fn get_rooms(
        &self,
        hotel_id: i32,
        public: bool,
    ) -> Result<Option<Vec<Room>>, AppError> {
        if self.get_by_id(hotel_id, public).await?.is_none() {
            return Ok(None);
        }

        let rooms = RoomRepository::new(self.db)
            .get_by_hotel(hotel_id, public)
            .await?;

        Ok(Some(rooms))
    }

    /// Gets a room; public lookups hide unavailable rooms and rooms of inactive hotels.
    pub async fn get_room(&self, id: i32, public: bool) -> Result<Option<Room>, AppError> {
        let Some(room) = RoomRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        if public
            && (!room.available || self.get_by_id(room.hotel_id, true).await?.is_none())
        {
            return Ok(None);
        }

        Ok(Some(room))
    }

    /// Adds a room to a hotel. Returns None if the hotel doesn't exist.
    pub async fn create_room(
        &self,
        hotel_id: i32,
        params: SaveRoomParams,
    ) -> Result<Option<Room>, AppError> {
        if HotelRepository::new(self.db)
            .find_by_id(hotel_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let room = RoomRepository::new(self.db).create(hotel_id, params).await?;

        Ok(Some(room))
    }

    pub async fn update_room(
        &self,
        id: i32,
        params: SaveRoomParams,
    ) -> Result<Option<Room>, AppError> {
        Ok(RoomRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete_room(&self, id: i32) -> Result<bool, AppError> {
        Ok(RoomRepository::new(self.db).delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that public room lookups respect room availability and hotel status.
    ///
    /// Expected: unavailable rooms and rooms of inactive hotels are hidden
    #[tokio::test]
    async fn public_room_visibility() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (hotel, room) = factory::helpers::create_hotel_with_room(db).await?;
        let closed = factory::room::RoomFactory::new(db, hotel.id)
            .available(false)
            .build()
            .await?;
        let inactive_hotel = factory::hotel::HotelFactory::new(db)
            .active(false)
            .build()
            .await?;
        let orphan_room = factory::create_room(db, inactive_hotel.id).await?;

        let service = HotelService::new(db);

        assert!(service.get_room(room.id, true).await?.is_some());
        assert!(service.get_room(closed.id, true).await?.is_none());
        assert!(service.get_room(closed.id, false).await?.is_some());
        assert!(service.get_room(orphan_room.id, true).await?.is_none());

        let public_rooms = service.get_rooms(hotel.id, true).await?.unwrap();
        assert_eq!(public_rooms.len(), 1);
        assert!(service.get_rooms(inactive_hotel.id, true).await?.is_none());

        Ok(())
    }

    /// Tests adding a room to a hotel that does not exist.
    ///
    /// Expected: Ok(None)
    #[tokio::test]
    async fn create_room_requires_hotel() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = HotelService::new(db)
            .create_room(
                42,
                SaveRoomParams {
                    name: "Suite".to_string(),
                    description: None,
                    max_adults: 2,
                    max_children: 0,
                    price: 10_000,
                    available: true,
                    image_url: None,
                },
            )
            .await?;

        assert!(result.is_none());

        Ok(())
    }
}
