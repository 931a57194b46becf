mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::cart_cleanup,
    service::admin::code::AdminCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let admin_code_service = AdminCodeService::new();

    // Check for admin users and log a setup link if none exist
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    // Held for the lifetime of the server
    let _scheduler = cart_cleanup::start_scheduler(db.clone(), config.cart_retention_days).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let app = router::router(&config)?
        .with_state(AppState::new(
            db,
            http_client,
            admin_code_service,
            std::sync::Arc::new(config.clone()),
        ))
        .layer(session);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
