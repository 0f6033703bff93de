/**
 * Server Initialization
 *
 * Connects the database pool, runs embedded migrations, and assembles
 * the application router with its state.
 */

use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Connect the pool and bring the schema up to date
pub async fn connect_database(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        sqlx::Error::Migrate(Box::new(e))
    })?;

    tracing::info!("Database ready");
    Ok(pool)
}

/// Build the application
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    let pool = connect_database(config).await?;
    let state = AppState::new(config, pool);

    Ok(create_router(state).layer(TraceLayer::new_for_http()))
}
