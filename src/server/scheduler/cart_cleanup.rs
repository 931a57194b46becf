use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::cart_item::CartItemRepository,
    error::{config::ConfigError, AppError},
};

/// Top of every hour.
const CLEANUP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the guest cart cleanup scheduler.
///
/// Once an hour, removes cart items that were never claimed by a logged-in user and are
/// older than the retention window.
///
/// # Arguments
/// - `db`: Database connection
/// - `retention_days`: Age in days after which guest cart items are deleted
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, keep it alive for the lifetime of the server
/// - `Err(AppError::SchedulerErr)` - Failed to create or start the scheduler
pub async fn start_scheduler(
    db: DatabaseConnection,
    retention_days: i64,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_guest_carts(&db, retention_days).await {
                tracing::error!("Error purging guest carts: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Guest cart cleanup scheduled hourly, retention {} days",
        retention_days
    );

    Ok(scheduler)
}

/// Deletes guest cart items older than `retention_days`.
///
/// # Returns
/// - `Ok(count)` - Number of cart items removed
/// - `Err(AppError::ConfigErr)` - Retention window does not fit a date
/// - `Err(AppError::DbErr)` - Database error during delete
pub async fn purge_guest_carts(
    db: &DatabaseConnection,
    retention_days: i64,
) -> Result<u64, AppError> {
    let cutoff = Duration::try_days(retention_days)
        .and_then(|retention| Utc::now().checked_sub_signed(retention))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "CART_RETENTION_DAYS".to_string(),
            value: retention_days.to_string(),
        })?;

    let deleted = CartItemRepository::new(db)
        .delete_guest_items_before(cutoff)
        .await?;

    if deleted > 0 {
        tracing::info!("Purged {} stale guest cart items", deleted);
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory, factory::cart_item::CartItemFactory};

    /// Expected: stale guest lines go, fresh guest lines and user lines stay
    #[tokio::test]
    async fn purges_stale_guest_items() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_commerce_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let now = Utc::now();
        let user = factory::create_user(db).await?;
        CartItemFactory::for_guest(db, "abandoned")
            .created_at(now - Duration::days(31))
            .build()
            .await?;
        CartItemFactory::for_guest(db, "recent")
            .created_at(now - Duration::hours(1))
            .build()
            .await?;
        CartItemFactory::for_user(db, user.id)
            .created_at(now - Duration::days(60))
            .build()
            .await?;

        assert_eq!(purge_guest_carts(db, 30).await?, 1);
        assert_eq!(purge_guest_carts(db, 30).await?, 0);

        Ok(())
    }

    /// Expected: an out-of-range retention is an error, not a panic
    #[tokio::test]
    async fn rejects_unrepresentable_retention() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_commerce_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = purge_guest_carts(db, i64::MAX).await;

        assert!(matches!(result, Err(AppError::ConfigErr(_))));

        Ok(())
    }
}
