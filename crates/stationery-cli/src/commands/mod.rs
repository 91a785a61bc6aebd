//! CLI command definitions and dispatch.

pub mod config;
pub mod hash;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use stationery_core::config::AppConfig;
use stationery_core::error::AppError;

/// Letras y Papeles stationery backend
#[derive(Debug, Parser)]
#[command(name = "stationery", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and per-environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load (config/{env}.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Print an Argon2id hash of a secret
    HashPassword(hash::HashPasswordArgs),
    /// Issue or inspect access tokens
    Token(token::TokenArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, self.load_config()?).await,
            Commands::HashPassword(args) => hash::execute(args),
            Commands::Token(args) => token::execute(args, &self.load_config()?, self.format),
            Commands::Config(args) => config::execute(args, self, self.format),
        }
    }

    /// Load and validate configuration for the selected environment
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from_dir(&self.config_dir, &self.env)
    }
}
