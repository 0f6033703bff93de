/**
 * Projex Server Entry Point
 *
 * Loads the environment, initializes tracing, builds the app (pool,
 * migrations, router) and serves it. Missing signing secrets or
 * database URL abort startup.
 */

use projex::server::{init, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Startup-fatal: every handler needs signing keys and the store.
    let config = Config::from_env()?;

    let app = init::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
