//! Checkout and order management.

use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cart_item::CartItemRepository, order::OrderRepository},
    error::AppError,
    model::{
        cart::{self, CartOwner},
        order::{CheckoutParams, NewOrder, NewOrderItem, Order, UpdateOrderStatusParams},
        pagination::{PageParams, Paginated},
        user::User,
    },
    util::order_number::generate_order_number,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts the owner's cart into an order.
    ///
    /// Reading the cart, inserting the order with its items and emptying the cart run in
    /// one transaction; any failure leaves the cart untouched.
    ///
    /// # Returns
    /// - `Ok(Order)` - Created order with its items
    /// - `Err(AppError::BadRequest)` - Cart is empty
    pub async fn checkout(
        &self,
        owner: &CartOwner,
        checkout: CheckoutParams,
    ) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let cart_repo = CartItemRepository::new(&txn);

        let items = cart_repo.get_by_owner(owner).await?;
        if items.is_empty() {
            return Err(AppError::BadRequest("Your cart is empty".to_string()));
        }

        let subtotal = cart::subtotal(&items)?;
        let order = OrderRepository::new(&txn)
            .create(NewOrder {
                order_number: generate_order_number(Utc::now()),
                user_id: owner.user_id(),
                checkout,
                subtotal,
                total: subtotal,
                items: items.into_iter().map(NewOrderItem::from_cart_item).collect(),
            })
            .await?;

        cart_repo.clear(owner).await?;
        txn.commit().await?;

        tracing::info!(
            "Order {} placed with {} items, total {}",
            order.order_number,
            order.items.len(),
            order.total
        );

        Ok(order)
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Gets an order by number if the viewer owns it or is an admin.
    ///
    /// Orders the viewer may not see are reported as missing.
    pub async fn get_by_number(
        &self,
        order_number: &str,
        viewer: &User,
    ) -> Result<Option<Order>, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_number(order_number)
            .await?;

        Ok(order.filter(|order| viewer.is_admin() || order.user_id == Some(viewer.id)))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        Ok(OrderRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        status: Option<OrderStatus>,
        page: PageParams,
    ) -> Result<Paginated<Order>, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_all_paginated(status, page.page, page.per_page)
            .await?;

        Ok(Paginated::new(orders, total, page))
    }

    /// Sets the fulfilment and/or payment status. Returns None if the order doesn't exist.
    pub async fn update_status(
        &self,
        id: i32,
        params: UpdateOrderStatusParams,
    ) -> Result<Option<Order>, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "Provide status or payment_status".to_string(),
            ));
        }

        let order = OrderRepository::new(self.db)
            .update_status(id, params.status, params.payment_status)
            .await?;

        if let Some(order) = &order {
            tracing::info!(
                "Order {} status set to {:?}/{:?}",
                order.order_number,
                order.status,
                order.payment_status
            );
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        error::pricing::PricingError, model::order::PaymentMethod, service::cart::CartService,
    };
    use entity::sea_orm_active_enums::PaymentStatus;
    use test_utils::{builder::TestBuilder, factory};

    fn checkout_params() -> CheckoutParams {
        CheckoutParams {
            customer_name: "Layla Hassan".to_string(),
            customer_email: "layla@example.com".to_string(),
            customer_phone: None,
            payment_method: PaymentMethod::Cash,
            notes: None,
        }
    }

    /// Tests converting a cart into an order.
    ///
    /// Expected: order totals match the cart and the cart is emptied
    #[tokio::test]
    async fn checkout_moves_cart_into_order() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        factory::cart_item::CartItemFactory::for_user(db, user.id)
            .unit_price(30_000)
            .quantity(2)
            .build()
            .await?;
        factory::cart_item::CartItemFactory::for_user(db, user.id)
            .unit_price(5_000)
            .build()
            .await?;
        let owner = CartOwner::User(user.id);

        let order = OrderService::new(db)
            .checkout(&owner, checkout_params())
            .await?;

        assert_eq!(order.subtotal, 65_000);
        assert_eq!(order.total, 65_000);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.user_id, Some(user.id));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert!(order.order_number.starts_with("ORD-"));

        let cart = CartService::new(db).get_cart(&owner).await?;
        assert!(cart.items.is_empty());

        Ok(())
    }

    /// Tests checking out an empty cart.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_empty_cart() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = OrderService::new(db)
            .checkout(&CartOwner::Guest("nobody".to_string()), checkout_params())
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests that orders are only visible to their owner and admins.
    ///
    /// Expected: owner and admin see the order, another user does not
    #[tokio::test]
    async fn restricts_order_lookup() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let owner = User::from_entity(factory::create_user(db).await?);
        let stranger = User::from_entity(factory::create_user(db).await?);
        let admin = User::from_entity(factory::create_admin(db).await?);
        factory::cart_item::CartItemFactory::for_user(db, owner.id)
            .build()
            .await?;

        let service = OrderService::new(db);
        let order = service
            .checkout(&CartOwner::User(owner.id), checkout_params())
            .await?;

        assert!(service
            .get_by_number(&order.order_number, &owner)
            .await?
            .is_some());
        assert!(service
            .get_by_number(&order.order_number, &admin)
            .await?
            .is_some());
        assert!(service
            .get_by_number(&order.order_number, &stranger)
            .await?
            .is_none());

        Ok(())
    }

    /// Tests an empty status update.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_empty_status_update() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = OrderService::new(db)
            .update_status(1, UpdateOrderStatusParams::default())
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests checking out lines whose sum exceeds the integer range.
    ///
    /// Expected: Err(PricingError::Overflow) and the cart is left intact
    #[tokio::test]
    async fn rejects_overflowing_subtotal() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        for _ in 0..2 {
            factory::cart_item::CartItemFactory::for_user(db, user.id)
                .unit_price(i64::MAX / 2 + 1)
                .build()
                .await?;
        }
        let owner = CartOwner::User(user.id);

        let result = OrderService::new(db)
            .checkout(&owner, checkout_params())
            .await;

        assert!(matches!(
            result,
            Err(AppError::PricingErr(PricingError::Overflow))
        ));
        assert_eq!(
            CartItemRepository::new(db).get_by_owner(&owner).await?.len(),
            2
        );

        Ok(())
    }
}
