//! Secret hashing for manual credential provisioning.

use clap::Args;
use dialoguer::Password;

use stationery_auth::PasswordHasher;
use stationery_core::error::AppError;

/// Arguments for the hash-password command
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Secret to hash; prompted for when omitted
    pub secret: Option<String>,
}

/// Execute the hash-password command
pub fn execute(args: &HashPasswordArgs) -> Result<(), AppError> {
    let secret = match &args.secret {
        Some(secret) => secret.clone(),
        None => Password::new()
            .with_prompt("Secret")
            .with_confirmation("Repeat secret", "Secrets do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Failed to read secret: {e}")))?,
    };

    if secret.is_empty() {
        return Err(AppError::validation("Secret must not be empty"));
    }

    println!("{}", PasswordHasher::new().hash_password(&secret)?);
    Ok(())
}
