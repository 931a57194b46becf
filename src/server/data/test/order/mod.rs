use crate::server::{
    data::order::OrderRepository,
    model::{
        cart::Pax,
        order::{CheckoutParams, NewOrder, NewOrderItem, PaymentMethod},
    },
};
use entity::sea_orm_active_enums::{ItemType, OrderStatus, PaymentStatus};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod dashboard_queries;
mod get_all_paginated;
mod update_status;

fn new_order(order_number: &str, user_id: Option<i32>, total: i64) -> NewOrder {
    NewOrder {
        order_number: order_number.to_string(),
        user_id,
        checkout: CheckoutParams {
            customer_name: "Layla Hassan".to_string(),
            customer_email: "layla@example.com".to_string(),
            customer_phone: None,
            payment_method: PaymentMethod::Cash,
            notes: None,
        },
        subtotal: total,
        total,
        items: vec![NewOrderItem {
            item_type: ItemType::Tour,
            item_id: 1,
            item_name: "Desert Safari".to_string(),
            quantity: 1,
            pax: Pax {
                adults: 2,
                children: 0,
                infants: 0,
            },
            travel_date: None,
            check_in: None,
            check_out: None,
            unit_price: total,
            total_price: total,
        }],
    }
}

async fn seed(db: &DatabaseConnection, number: &str, total: i64) -> Result<i32, DbErr> {
    let order = OrderRepository::new(db)
        .create(new_order(number, None, total))
        .await?;

    Ok(order.id)
}
