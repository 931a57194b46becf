//! Cart item data repository.
//!
//! Every query is scoped by a [`CartOwner`] so a line can only be read or changed through
//! the cart it belongs to. Guest lines are matched on their token and must not have been
//! claimed by a user yet. The repository is generic over the connection so checkout can
//! read and clear the cart inside its order transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::cart::{CartItem, CartOwner, NewCartItem};

pub struct CartItemRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C> CartItemRepository<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a priced line into the owner's cart.
    pub async fn create(&self, item: NewCartItem) -> Result<CartItem, DbErr> {
        let (user_id, guest_token) = match item.owner {
            CartOwner::User(id) => (Some(id), None),
            CartOwner::Guest(token) => (None, Some(token)),
        };

        let entity = entity::cart_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            guest_token: ActiveValue::Set(guest_token),
            item_type: ActiveValue::Set(item.item_type),
            item_id: ActiveValue::Set(item.item_id),
            item_name: ActiveValue::Set(item.item_name),
            quantity: ActiveValue::Set(item.quantity),
            adults: ActiveValue::Set(item.pax.adults),
            children: ActiveValue::Set(item.pax.children),
            infants: ActiveValue::Set(item.pax.infants),
            travel_date: ActiveValue::Set(item.travel_date),
            check_in: ActiveValue::Set(item.check_in),
            check_out: ActiveValue::Set(item.check_out),
            transport_type_id: ActiveValue::Set(item.transport_type_id),
            unit_price: ActiveValue::Set(item.unit_price),
            total_price: ActiveValue::Set(item.total_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CartItem::from_entity(entity))
    }

    /// Gets the owner's cart lines in the order they were added.
    pub async fn get_by_owner(&self, owner: &CartOwner) -> Result<Vec<CartItem>, DbErr> {
        let entities = entity::prelude::CartItem::find()
            .filter(owner_condition(owner))
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CartItem::from_entity).collect())
    }

    /// Finds a line by ID only if it belongs to `owner`.
    pub async fn find_owned(&self, id: i32, owner: &CartOwner) -> Result<Option<CartItem>, DbErr> {
        let entity = entity::prelude::CartItem::find_by_id(id)
            .filter(owner_condition(owner))
            .one(self.db)
            .await?;

        Ok(entity.map(CartItem::from_entity))
    }

    /// Sets a new quantity and the recomputed line total.
    ///
    /// # Returns
    /// - `Ok(Some(CartItem))` - Updated line
    /// - `Ok(None)` - Line missing or owned by someone else
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_quantity(
        &self,
        id: i32,
        owner: &CartOwner,
        quantity: i32,
        total_price: i64,
    ) -> Result<Option<CartItem>, DbErr> {
        let Some(existing) = entity::prelude::CartItem::find_by_id(id)
            .filter(owner_condition(owner))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::cart_item::ActiveModel = existing.into();
        active.quantity = ActiveValue::Set(quantity);
        active.total_price = ActiveValue::Set(total_price);
        let entity = active.update(self.db).await?;

        Ok(Some(CartItem::from_entity(entity)))
    }

    /// Deletes a line only if it belongs to `owner`.
    pub async fn delete_owned(&self, id: i32, owner: &CartOwner) -> Result<bool, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::Id.eq(id))
            .filter(owner_condition(owner))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every line of the owner's cart, returning how many were deleted.
    pub async fn clear(&self, owner: &CartOwner) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(owner_condition(owner))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a guest cart into a user's cart after login.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of lines that changed owner
    /// - `Err(DbErr)` - Database error during update
    pub async fn assign_guest_items_to_user(
        &self,
        guest_token: &str,
        user_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::update_many()
            .col_expr(entity::cart_item::Column::UserId, Expr::value(user_id))
            .col_expr(
                entity::cart_item::Column::GuestToken,
                Expr::value(Option::<String>::None),
            )
            .filter(owner_condition(&CartOwner::Guest(guest_token.to_string())))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes unclaimed guest lines created before `cutoff`.
    pub async fn delete_guest_items_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::UserId.is_null())
            .filter(entity::cart_item::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn owner_condition(owner: &CartOwner) -> Condition {
    match owner {
        CartOwner::User(id) => Condition::all().add(entity::cart_item::Column::UserId.eq(*id)),
        CartOwner::Guest(token) => Condition::all()
            .add(entity::cart_item::Column::GuestToken.eq(token.as_str()))
            .add(entity::cart_item::Column::UserId.is_null()),
    }
}
