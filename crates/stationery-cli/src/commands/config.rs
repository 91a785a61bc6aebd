//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use stationery_core::config::AppConfig;
use stationery_core::error::AppError;

use super::Cli;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (secret masked)
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, cli: &Cli, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = masked(cli.load_config()?);
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match cli.load_config() {
            Ok(config) => {
                output::print_success(&format!(
                    "Configuration '{}/{}' is valid",
                    cli.config_dir, cli.env
                ));
                println!("  Server: {}", config.bind_address());
                println!("  Token TTL: {}s", config.auth.jwt_ttl_seconds);
                println!("  Roles: {}", config.auth.bootstrap_roles.join(", "));
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }
    Ok(())
}

fn masked(mut config: AppConfig) -> AppConfig {
    config.auth.jwt_secret = "********".to_string();
    config.seed.demo_secret = "********".to_string();
    config
}
