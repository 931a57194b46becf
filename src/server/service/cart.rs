//! Session-owned shopping cart.
//!
//! Every line is priced on the server when it is added. The referenced catalog item is
//! loaded, checked for availability and quoted through [`pricing`]; the resulting unit
//! price and item name are stored with the line so the cart stays stable if the
//! catalog changes afterwards.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ItemType;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        cart_item::CartItemRepository, hotel::HotelRepository, package::PackageRepository,
        room::RoomRepository, tour::TourRepository, transport_type::TransportTypeRepository,
        visa::VisaRepository,
    },
    error::AppError,
    model::cart::{AddCartItemParams, Cart, CartItem, CartOwner, NewCartItem, Pax},
    service::pricing::{self, PriceRequest, Priceable},
};

/// Catalog item resolved for pricing.
struct ResolvedItem {
    name: String,
    priceable: Priceable,
}

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_cart(&self, owner: &CartOwner) -> Result<Cart, AppError> {
        let items = CartItemRepository::new(self.db).get_by_owner(owner).await?;

        Ok(Cart::from_items(items)?)
    }

    /// Prices and adds a line to the owner's cart.
    ///
    /// # Returns
    /// - `Ok(CartItem)` - Stored line with its pricing snapshot
    /// - `Err(AppError::NotFound)` - Item missing, inactive or unavailable
    /// - `Err(AppError::BadRequest)` - Dates in the past, party too large for a room, or
    ///   transport chosen for an item that cannot use it
    /// - `Err(AppError::PricingErr)` - Traveller counts or stay dates cannot be priced
    pub async fn add_item(
        &self,
        owner: CartOwner,
        params: AddCartItemParams,
    ) -> Result<CartItem, AppError> {
        check_dates(&params, Utc::now().date_naive())?;

        let item = self
            .resolve_item(params.item_type, params.item_id, params.pax)
            .await?;
        let multiplier_percent = self
            .transport_multiplier(params.item_type, params.transport_type_id)
            .await?;

        let quote = pricing::quote(
            &item.priceable,
            &PriceRequest {
                pax: params.pax,
                quantity: params.quantity,
                check_in: params.check_in,
                check_out: params.check_out,
                multiplier_percent,
            },
        )?;

        let line = CartItemRepository::new(self.db)
            .create(NewCartItem {
                owner,
                item_type: params.item_type,
                item_id: params.item_id,
                item_name: item.name,
                quantity: params.quantity,
                pax: params.pax,
                travel_date: params.travel_date,
                check_in: params.check_in,
                check_out: params.check_out,
                transport_type_id: params.transport_type_id,
                unit_price: quote.unit_price,
                total_price: quote.total_price,
            })
            .await?;

        Ok(line)
    }

    /// Changes a line's quantity, recomputing its total from the stored unit price.
    ///
    /// Returns None if the line doesn't exist or belongs to someone else.
    pub async fn update_quantity(
        &self,
        owner: &CartOwner,
        id: i32,
        quantity: i32,
    ) -> Result<Option<CartItem>, AppError> {
        let repo = CartItemRepository::new(self.db);

        let Some(existing) = repo.find_owned(id, owner).await? else {
            return Ok(None);
        };

        let total_price = pricing::line_total(existing.unit_price, quantity)?;

        Ok(repo
            .update_quantity(id, owner, quantity, total_price)
            .await?)
    }

    pub async fn remove_item(&self, owner: &CartOwner, id: i32) -> Result<bool, AppError> {
        Ok(CartItemRepository::new(self.db)
            .delete_owned(id, owner)
            .await?)
    }

    pub async fn clear(&self, owner: &CartOwner) -> Result<u64, AppError> {
        Ok(CartItemRepository::new(self.db).clear(owner).await?)
    }

    /// Moves a guest's cart lines to a user who just logged in or registered.
    pub async fn merge_guest_cart(&self, guest_token: &str, user_id: i32) -> Result<u64, AppError> {
        let moved = CartItemRepository::new(self.db)
            .assign_guest_items_to_user(guest_token, user_id)
            .await?;

        if moved > 0 {
            tracing::debug!("Merged {} guest cart items into user {}", moved, user_id);
        }

        Ok(moved)
    }

    async fn resolve_item(
        &self,
        item_type: ItemType,
        item_id: i32,
        pax: Pax,
    ) -> Result<ResolvedItem, AppError> {
        let not_found = || AppError::NotFound(format!("{:?} {} not found", item_type, item_id));

        let resolved = match item_type {
            ItemType::Package => {
                let package = PackageRepository::new(self.db)
                    .find_by_id(item_id)
                    .await?
                    .filter(|p| p.active)
                    .ok_or_else(not_found)?;

                ResolvedItem {
                    name: package.title,
                    priceable: Priceable::Package {
                        price: package.price,
                        discounted_price: package.discounted_price,
                        child_price: package.child_price,
                    },
                }
            }
            ItemType::Tour => {
                let tour = TourRepository::new(self.db)
                    .find_by_id(item_id)
                    .await?
                    .filter(|t| t.active)
                    .ok_or_else(not_found)?;

                ResolvedItem {
                    name: tour.title,
                    priceable: Priceable::Tour {
                        price: tour.price,
                        child_price: tour.child_price,
                    },
                }
            }
            ItemType::Hotel => {
                let hotel = HotelRepository::new(self.db)
                    .find_by_id(item_id)
                    .await?
                    .filter(|h| h.active)
                    .ok_or_else(not_found)?;

                ResolvedItem {
                    name: hotel.name,
                    priceable: Priceable::Hotel {
                        base_price: hotel.base_price,
                    },
                }
            }
            ItemType::Room => {
                let room = RoomRepository::new(self.db)
                    .find_by_id(item_id)
                    .await?
                    .filter(|r| r.available)
                    .ok_or_else(not_found)?;
                let hotel = HotelRepository::new(self.db)
                    .find_by_id(room.hotel_id)
                    .await?
                    .filter(|h| h.active)
                    .ok_or_else(not_found)?;

                if pax.adults > room.max_adults || pax.children > room.max_children {
                    return Err(AppError::BadRequest(format!(
                        "{} fits at most {} adults and {} children",
                        room.name, room.max_adults, room.max_children
                    )));
                }

                ResolvedItem {
                    name: format!("{} - {}", hotel.name, room.name),
                    priceable: Priceable::Room { price: room.price },
                }
            }
            ItemType::Visa => {
                let visa = VisaRepository::new(self.db)
                    .find_by_id(item_id)
                    .await?
                    .filter(|v| v.active)
                    .ok_or_else(not_found)?;

                ResolvedItem {
                    name: visa.title,
                    priceable: Priceable::Visa { price: visa.price },
                }
            }
        };

        Ok(resolved)
    }

    /// Looks up the transport multiplier; only packages and tours accept transport.
    async fn transport_multiplier(
        &self,
        item_type: ItemType,
        transport_type_id: Option<i32>,
    ) -> Result<Option<i32>, AppError> {
        let Some(id) = transport_type_id else {
            return Ok(None);
        };

        if !matches!(item_type, ItemType::Package | ItemType::Tour) {
            return Err(AppError::BadRequest(
                "Transport can only be added to packages and tours".to_string(),
            ));
        }

        let transport = TransportTypeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Transport type {} does not exist", id)))?;

        Ok(Some(transport.multiplier_percent))
    }
}

fn check_dates(params: &AddCartItemParams, today: NaiveDate) -> Result<(), AppError> {
    let in_past = |date: Option<NaiveDate>| date.is_some_and(|d| d < today);

    if in_past(params.travel_date) {
        return Err(AppError::BadRequest(
            "Travel date must not be in the past".to_string(),
        ));
    }
    if in_past(params.check_in) {
        return Err(AppError::BadRequest(
            "Check-in date must not be in the past".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    fn params(item_type: ItemType, item_id: i32, adults: i32) -> AddCartItemParams {
        AddCartItemParams {
            item_type,
            item_id,
            quantity: 1,
            pax: Pax {
                adults,
                children: 0,
                infants: 0,
            },
            travel_date: None,
            check_in: None,
            check_out: None,
            transport_type_id: None,
        }
    }

    #[test]
    fn rejects_past_dates() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        let mut request = params(ItemType::Tour, 1, 1);

        request.travel_date = NaiveDate::from_ymd_opt(2026, 5, 9);
        assert!(check_dates(&request, today).is_err());

        request.travel_date = Some(today);
        assert!(check_dates(&request, today).is_ok());

        request.check_in = NaiveDate::from_ymd_opt(2026, 1, 1);
        assert!(check_dates(&request, today).is_err());
    }

    /// Tests pricing a package line with a transport multiplier.
    ///
    /// Expected: unit price uses the discount and the multiplier, total uses quantity
    #[tokio::test]
    async fn prices_package_with_transport() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let destination = factory::create_destination(db).await?;
        let package = factory::package::PackageFactory::new(db, destination.id)
            .price(100_000)
            .discounted_price(Some(80_000))
            .build()
            .await?;
        let transport = factory::create_transport_type(db, 125).await?;

        let mut request = params(ItemType::Package, package.id, 2);
        request.quantity = 2;
        request.pax.children = 1;
        request.transport_type_id = Some(transport.id);

        let line = CartService::new(db)
            .add_item(CartOwner::User(user.id), request)
            .await?;

        // (2 * 80_000 + 40_000) * 1.25
        assert_eq!(line.unit_price, 250_000);
        assert_eq!(line.total_price, 500_000);
        assert_eq!(line.item_name, package.title);

        Ok(())
    }

    /// Tests adding a room for a party larger than the room allows.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_party_too_large_for_room() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (_, room) = factory::helpers::create_hotel_with_room(db).await?;

        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        let mut request = params(ItemType::Room, room.id, 3);
        request.check_in = Some(tomorrow);
        request.check_out = Some(tomorrow + Duration::days(2));

        let result = CartService::new(db)
            .add_item(CartOwner::Guest("guest-token".to_string()), request)
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests pricing a room stay by nights.
    ///
    /// Expected: unit price is nightly rate times nights
    #[tokio::test]
    async fn prices_room_by_nights() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (hotel, room) = factory::helpers::create_hotel_with_room(db).await?;

        let check_in = Utc::now().date_naive() + Duration::days(3);
        let mut request = params(ItemType::Room, room.id, 2);
        request.check_in = Some(check_in);
        request.check_out = Some(check_in + Duration::days(3));

        let line = CartService::new(db)
            .add_item(CartOwner::Guest("guest-token".to_string()), request)
            .await?;

        assert_eq!(line.unit_price, room.price * 3);
        assert_eq!(line.item_name, format!("{} - {}", hotel.name, room.name));

        Ok(())
    }

    /// Tests that inactive items cannot be added.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn rejects_inactive_tour() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let destination = factory::create_destination(db).await?;
        let tour = factory::tour::TourFactory::new(db, destination.id)
            .active(false)
            .build()
            .await?;

        let result = CartService::new(db)
            .add_item(
                CartOwner::Guest("guest-token".to_string()),
                params(ItemType::Tour, tour.id, 1),
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests that transport is refused for visas.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_transport_for_visa() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (_, visa) = factory::helpers::create_visa_with_country(db).await?;
        let transport = factory::create_transport_type(db, 110).await?;

        let mut request = params(ItemType::Visa, visa.id, 1);
        request.transport_type_id = Some(transport.id);

        let result = CartService::new(db)
            .add_item(CartOwner::Guest("guest-token".to_string()), request)
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests changing a line's quantity.
    ///
    /// Expected: total recomputed from unit price; other owners get None
    #[tokio::test]
    async fn updates_quantity_for_owner_only() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let other = factory::create_user(db).await?;
        let line = factory::cart_item::CartItemFactory::for_user(db, user.id)
            .unit_price(15_000)
            .build()
            .await?;

        let service = CartService::new(db);

        let updated = service
            .update_quantity(&CartOwner::User(user.id), line.id, 3)
            .await?
            .unwrap();
        assert_eq!(updated.total_price, 45_000);

        let foreign = service
            .update_quantity(&CartOwner::User(other.id), line.id, 2)
            .await?;
        assert!(foreign.is_none());

        Ok(())
    }

    /// Tests merging a guest cart after login.
    ///
    /// Expected: guest lines now belong to the user
    #[tokio::test]
    async fn merges_guest_cart() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        factory::cart_item::CartItemFactory::for_guest(db, "guest-abc")
            .build()
            .await?;
        factory::cart_item::CartItemFactory::for_user(db, user.id)
            .build()
            .await?;

        let service = CartService::new(db);
        let moved = service.merge_guest_cart("guest-abc", user.id).await?;
        let cart = service.get_cart(&CartOwner::User(user.id)).await?;
        let guest_cart = service
            .get_cart(&CartOwner::Guest("guest-abc".to_string()))
            .await?;

        assert_eq!(moved, 1);
        assert_eq!(cart.items.len(), 2);
        assert!(guest_cart.items.is_empty());

        Ok(())
    }
}
