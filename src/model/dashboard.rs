use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::order::{OrderDto, OrderStatusDto};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct DashboardCountsDto {
    pub users: u64,
    pub destinations: u64,
    pub packages: u64,
    pub tours: u64,
    pub hotels: u64,
    pub bookings: u64,
    pub orders: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct OrderStatusCountDto {
    pub status: OrderStatusDto,
    pub count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct DashboardDto {
    pub counts: DashboardCountsDto,
    /// Sum of order totals excluding cancelled orders.
    pub revenue: i64,
    pub orders_by_status: Vec<OrderStatusCountDto>,
    pub recent_orders: Vec<OrderDto>,
}
