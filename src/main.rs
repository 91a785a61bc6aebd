//! Letras y Papeles stationery backend server.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use stationery_core::config::AppConfig;
use stationery_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `STATIONERY_CONFIG_DIR` and `STATIONERY_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    let dir = std::env::var("STATIONERY_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("STATIONERY_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from_dir(&dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting stationery backend v{}", env!("CARGO_PKG_VERSION"));

    let state = stationery_api::bootstrap(config)?;
    stationery_api::run_server(state).await
}
