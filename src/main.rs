//! Service entry point: configuration, database bootstrap, HTTP server.

use casetrace::{api, config, errors::Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::settings::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database (URL comes from app_config)
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ensured."))
        .inspect_err(|e| error!("Failed to create database tables: {}", e))?;

    // 5. Serve the API
    let state = api::AppState::new(db);
    let listener = tokio::net::TcpListener::bind(app_config.bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", app_config.bind_addr, e))?;
    info!("Listening on http://{}", app_config.bind_addr);

    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
