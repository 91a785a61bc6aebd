//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder secret shipped in the defaults. Tolerated in development only.
pub const PLACEHOLDER_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Minimum signing secret length outside development (HS512 block-sized keys
/// start here).
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime: 30 days.
pub const MAX_JWT_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Prefix some callers put in front of role names.
const AUTHORITY_PREFIX: &str = "ROLE_";

/// Token signing and role bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for token signing (HMAC-SHA512).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_ttl")]
    pub jwt_ttl_seconds: u64,
    /// Role names that must exist before any identity is created.
    #[serde(default = "default_bootstrap_roles")]
    pub bootstrap_roles: Vec<String>,
    /// Role assigned to self-registered identities.
    #[serde(default = "default_role")]
    pub default_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_seconds: default_ttl(),
            bootstrap_roles: default_bootstrap_roles(),
            default_role: default_role(),
        }
    }
}

impl AuthConfig {
    /// Validate the section.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.jwt_secret == PLACEHOLDER_JWT_SECRET {
            tracing::warn!("auth.jwt_secret is the shipped placeholder; set STATIONERY__AUTH__JWT_SECRET");
        }
        if self.jwt_ttl_seconds == 0 {
            return Err(AppError::configuration("auth.jwt_ttl_seconds must be positive"));
        }
        if self.jwt_ttl_seconds > MAX_JWT_TTL_SECONDS {
            return Err(AppError::configuration(format!(
                "auth.jwt_ttl_seconds must not exceed {MAX_JWT_TTL_SECONDS}"
            )));
        }
        if self.bootstrap_roles.is_empty() {
            return Err(AppError::configuration("auth.bootstrap_roles must not be empty"));
        }
        let default_role = canonical_role(&self.default_role);
        let default_known = self
            .bootstrap_roles
            .iter()
            .any(|r| canonical_role(r) == default_role);
        if !default_known {
            return Err(AppError::configuration(format!(
                "auth.default_role '{}' is not one of auth.bootstrap_roles",
                self.default_role
            )));
        }
        Ok(())
    }

    /// Reject secrets that are unfit for a deployed environment: the shipped
    /// placeholder, or anything shorter than [`MIN_JWT_SECRET_BYTES`].
    pub fn validate_deployed_secret(&self) -> Result<(), AppError> {
        if self.jwt_secret == PLACEHOLDER_JWT_SECRET {
            return Err(AppError::configuration(
                "auth.jwt_secret is the shipped placeholder; set STATIONERY__AUTH__JWT_SECRET",
            ));
        }
        if self.jwt_secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be at least {MIN_JWT_SECRET_BYTES} bytes"
            )));
        }
        Ok(())
    }
}

/// Role name in the form `RoleName::parse` produces: trimmed, upper-cased,
/// without the `ROLE_` prefix.
fn canonical_role(raw: &str) -> String {
    let upper = raw.trim().to_ascii_uppercase();
    match upper.strip_prefix(AUTHORITY_PREFIX) {
        Some(name) => name.to_string(),
        None => upper,
    }
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_ttl() -> u64 {
    3600
}

fn default_bootstrap_roles() -> Vec<String> {
    vec![
        "CUSTOMER".to_string(),
        "EMPLOYEE".to_string(),
        "MANAGER".to_string(),
        "ADMIN".to_string(),
    ]
}

fn default_role() -> String {
    "CUSTOMER".to_string()
}
