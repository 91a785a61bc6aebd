//! Start the HTTP server.

use clap::Args;

use stationery_core::config::AppConfig;
use stationery_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Seed the demo identities on an empty store
    #[arg(long)]
    pub seed_demo: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.seed_demo {
        config.seed.demo_identities = true;
    }
    config.validate()?;

    println!("Starting stationery server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let state = stationery_api::bootstrap(config)?;
    stationery_api::run_server(state).await
}
