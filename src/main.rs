//! Dogshouse service binary entry point.

use std::sync::Arc;

use dogshouse::config::Config;
use dogshouse::server::HttpServer;
use dogshouse::service::DogService;
use dogshouse::storage::SqliteStorage;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("dogshouse starting...");

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, bind={}",
        config.database_path,
        config.bind_addr
    );

    // Connect storage and run startup migrations
    let storage = match SqliteStorage::new(&config.database_path).await {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("Storage error: {e}");
            std::process::exit(1);
        }
    };

    // Wire the service and serve
    let service = DogService::new(Arc::new(storage));
    let server = HttpServer::new(service);
    if let Err(e) = server.serve(&config.bind_addr).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("dogshouse shutdown complete");
}
