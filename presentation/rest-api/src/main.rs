use dotenvy::dotenv;

use rest_api::config::{app_config::AppConfig, database_config};
use rest_api::setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// Loads configuration, connects and migrates the database, wires the
/// adapters into the use cases and serves the HTTP API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, config.recipes_page_size);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
