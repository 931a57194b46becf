use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::admin::code::AdminCodeService,
};

const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application database.
///
/// Sessions are stored in the same Sqlite pool as the rest of the data and expire
/// after seven days without a request. The cookie is only marked `Secure` when the
/// application is served over HTTPS.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok(session_layer)
}

/// HTTP client shared by outbound integrations.
///
/// Redirects are disabled so API keys passed as query parameters are never forwarded
/// to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Issues an admin setup code when no admin account exists yet.
///
/// Logs a registration link carrying the code. Registering through that link before
/// the code expires creates the first admin.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account found. Register an admin at {}/register?admin_code={}",
        config.app_url.trim_end_matches('/'),
        code
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::UserRole;
    use std::path::PathBuf;
    use test_utils::{builder::TestBuilder, factory};

    fn config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            app_url: "http://localhost:8080".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 1024,
            translation_scan_dir: PathBuf::from("client/src"),
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".to_string(),
            cart_retention_days: 30,
        }
    }

    /// Expected: a code is issued while there is no admin account
    #[tokio::test]
    async fn issues_code_without_admin() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let codes = AdminCodeService::new();

        check_for_admin(db, &config(), &codes).await?;

        assert!(codes.has_valid_code().await);

        Ok(())
    }

    /// Expected: no code is issued once an admin exists
    #[tokio::test]
    async fn skips_code_with_admin() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::user::UserFactory::new(db)
            .role(UserRole::Admin)
            .build()
            .await?;
        let codes = AdminCodeService::new();

        check_for_admin(db, &config(), &codes).await?;

        assert!(!codes.has_valid_code().await);

        Ok(())
    }
}
