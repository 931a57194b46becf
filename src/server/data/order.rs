//! Order data repository.
//!
//! An order and its item rows are always written and read together. The repository is
//! generic over the connection so checkout can insert the order and clear the cart in
//! the same transaction.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, Iterable, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::model::order::{NewOrder, Order};

pub struct OrderRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C> OrderRepository<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order with `Pending` statuses together with its item rows.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order including items
    /// - `Err(DbErr)` - Database error, including order number unique violations
    pub async fn create(&self, order: NewOrder) -> Result<Order, DbErr> {
        let checkout = order.checkout;
        let entity = entity::order::ActiveModel {
            order_number: ActiveValue::Set(order.order_number),
            user_id: ActiveValue::Set(order.user_id),
            customer_name: ActiveValue::Set(checkout.customer_name),
            customer_email: ActiveValue::Set(checkout.customer_email),
            customer_phone: ActiveValue::Set(checkout.customer_phone),
            status: ActiveValue::Set(OrderStatus::Pending),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_method: ActiveValue::Set(checkout.payment_method.to_string()),
            subtotal: ActiveValue::Set(order.subtotal),
            total: ActiveValue::Set(order.total),
            notes: ActiveValue::Set(checkout.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let item_entity = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(entity.id),
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
                unit_price: ActiveValue::Set(item.unit_price),
                total_price: ActiveValue::Set(item.total_price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item_entity);
        }

        Order::from_entity(entity, items)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find_by_id(id).one(self.db).await?;

        self.with_items(entity.into_iter().collect())
            .await
            .map(|mut orders| orders.pop())
    }

    pub async fn find_by_number(&self, order_number: &str) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find()
            .filter(entity::order::Column::OrderNumber.eq(order_number))
            .one(self.db)
            .await?;

        self.with_items(entity.into_iter().collect())
            .await
            .map(|mut orders| orders.pop())
    }

    /// Gets the orders placed by a user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        self.with_items(entities).await
    }

    /// Gets orders with pagination for the admin listing, newest first.
    ///
    /// # Arguments
    /// - `status` - Only return orders in this fulfilment status when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of orders per page
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders for the page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .apply_if(status, |query, status| {
                query.filter(entity::order::Column::Status.eq(status))
            })
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((self.with_items(entities).await?, total))
    }

    /// Applies whichever statuses are set.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order including items
    /// - `Ok(None)` - No order with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: Option<OrderStatus>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Option<Order>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = existing.into();
        if let Some(status) = status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(payment_status) = payment_status {
            active.payment_status = ActiveValue::Set(payment_status);
        }
        let entity = active.update(self.db).await?;

        self.with_items(vec![entity])
            .await
            .map(|mut orders| orders.pop())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Order::find().count(self.db).await
    }

    /// Sums order totals in SQL, excluding cancelled orders.
    ///
    /// Sqlite reports an integer overflow as an error rather than wrapping.
    pub async fn revenue(&self) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::Order::find()
            .select_only()
            .column_as(entity::order::Column::Total.sum(), "revenue")
            .filter(entity::order::Column::Status.ne(OrderStatus::Cancelled))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// Counts orders in every fulfilment status with one grouped query.
    ///
    /// Statuses without orders are reported with a zero count.
    pub async fn count_by_status(&self) -> Result<Vec<(OrderStatus, u64)>, DbErr> {
        let rows: Vec<(OrderStatus, i64)> = entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::Status)
            .column_as(entity::order::Column::Id.count(), "count")
            .group_by(entity::order::Column::Status)
            .into_tuple()
            .all(self.db)
            .await?;

        let counts: HashMap<OrderStatus, i64> = rows.into_iter().collect();

        Ok(OrderStatus::iter()
            .map(|status| {
                let count = counts.get(&status).copied().unwrap_or(0);
                (status, u64::try_from(count).unwrap_or(0))
            })
            .collect())
    }

    /// Gets the most recent orders, newest first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_items(entities).await
    }

    /// Loads item rows for a batch of orders with a single query, keeping the input order.
    async fn with_items(&self, orders: Vec<entity::order::Model>) -> Result<Vec<Order>, DbErr> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let item_entities = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in item_entities {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect()
    }
}
