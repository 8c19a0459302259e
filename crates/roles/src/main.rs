use anyhow::{Context, Result};
use roles::{
    handler::AppRouter,
    kafka::{RoleEventConsumer, RoleEventHandler},
    state::AppState,
};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    init_logger("roles-service");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = Arc::new(AppState::new(pool));

    let event_handler = Arc::new(RoleEventHandler::new(
        state.di_container.role_command.clone(),
    ));
    let consumer =
        RoleEventConsumer::new(&config.kafka_broker, &config.kafka_group_id, event_handler)
            .context("Failed to create Kafka consumer")?;
    consumer
        .start()
        .await
        .context("Failed to start Kafka consumer")?;

    info!("🚀 Roles service started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start HTTP server")?;

    info!("✅ Roles service shutdown complete");

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    Ok(())
}
