//! Access token issuing and inspection.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;

use stationery_auth::TokenCodec;
use stationery_core::config::AppConfig;
use stationery_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Sign a token for an identifier with the configured secret and TTL
    Issue {
        /// Subject (login identifier)
        subject: String,
    },
    /// Decode a token and report whether it is valid now
    Inspect {
        /// Compact token string
        token: String,
    },
}

#[derive(Debug, Serialize)]
struct InspectReport {
    subject: String,
    issued_at: Option<String>,
    expires_at: Option<String>,
    valid: bool,
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let codec = TokenCodec::new(&config.auth)?;
    let now = Utc::now();

    match &args.command {
        TokenCommand::Issue { subject } => {
            let issued = codec.issue(subject, now)?;
            match format {
                OutputFormat::Text => {
                    println!("{}", issued.token);
                    eprintln!("expires at {}", issued.expires_at.to_rfc3339());
                }
                OutputFormat::Json => output::print_item(&issued, format),
            }
        }
        TokenCommand::Inspect { token } => match codec.verify(token, now) {
            Ok(claims) => {
                let report = InspectReport {
                    subject: claims.sub.clone(),
                    issued_at: claims.issued_at().map(|t| t.to_rfc3339()),
                    expires_at: claims.expires_at().map(|t| t.to_rfc3339()),
                    valid: true,
                };
                output::print_item(&report, format);
            }
            Err(reason) => {
                return Err(AppError::authentication(format!("Token rejected: {reason}")));
            }
        },
    }

    Ok(())
}
