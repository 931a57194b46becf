use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{DashboardCountsDto, DashboardDto, OrderStatusCountDto},
    server::{
        data::{
            booking::BookingRepository, destination::DestinationRepository,
            hotel::HotelRepository, order::OrderRepository, package::PackageRepository,
            tour::TourRepository, user::UserRepository,
        },
        error::AppError,
        model::order::Order,
    },
};

const RECENT_ORDER_LIMIT: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub users: u64,
    pub destinations: u64,
    pub packages: u64,
    pub tours: u64,
    pub hotels: u64,
    pub bookings: u64,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub counts: DashboardCounts,
    pub revenue: i64,
    pub orders_by_status: Vec<(OrderStatus, u64)>,
    pub recent_orders: Vec<Order>,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            counts: DashboardCountsDto {
                users: self.counts.users,
                destinations: self.counts.destinations,
                packages: self.counts.packages,
                tours: self.counts.tours,
                hotels: self.counts.hotels,
                bookings: self.counts.bookings,
                orders: self.counts.orders,
            },
            revenue: self.revenue,
            orders_by_status: self
                .orders_by_status
                .into_iter()
                .map(|(status, count)| OrderStatusCountDto {
                    status: status.into(),
                    count,
                })
                .collect(),
            recent_orders: self.recent_orders.into_iter().map(Order::into_dto).collect(),
        }
    }
}

/// Aggregated back-office figures.
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<Dashboard, AppError> {
        let orders = OrderRepository::new(self.db);

        let counts = DashboardCounts {
            users: UserRepository::new(self.db).count().await?,
            destinations: DestinationRepository::new(self.db).count().await?,
            packages: PackageRepository::new(self.db).count().await?,
            tours: TourRepository::new(self.db).count().await?,
            hotels: HotelRepository::new(self.db).count().await?,
            bookings: BookingRepository::new(self.db).count().await?,
            orders: orders.count().await?,
        };

        Ok(Dashboard {
            counts,
            revenue: orders.revenue().await?,
            orders_by_status: orders.count_by_status().await?,
            recent_orders: orders.recent(RECENT_ORDER_LIMIT).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests the dashboard on a small data set.
    ///
    /// Expected: counts reflect inserted rows, revenue is zero without orders
    #[tokio::test]
    async fn counts_rows() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_user(db).await?;
        factory::create_admin(db).await?;
        factory::helpers::create_package_with_destination(db).await?;
        factory::create_hotel(db).await?;

        let dashboard = DashboardService::new(db).get().await?;

        assert_eq!(dashboard.counts.users, 2);
        assert_eq!(dashboard.counts.destinations, 1);
        assert_eq!(dashboard.counts.packages, 1);
        assert_eq!(dashboard.counts.hotels, 1);
        assert_eq!(dashboard.counts.orders, 0);
        assert_eq!(dashboard.revenue, 0);
        assert!(dashboard.recent_orders.is_empty());
        assert!(dashboard
            .orders_by_status
            .iter()
            .all(|(_, count)| *count == 0));

        Ok(())
    }
}
