//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login identifier (e-mail address).
    #[serde(alias = "username", alias = "email")]
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
    /// Plaintext secret.
    #[serde(alias = "password")]
    #[validate(length(min = 1, message = "Secret is required"))]
    pub secret: String,
}

/// Self-service registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Login identifier; must be an e-mail address.
    #[serde(alias = "email")]
    #[validate(email(message = "Identifier must be an e-mail address"))]
    pub identifier: String,
    /// Plaintext secret.
    #[serde(alias = "password")]
    #[validate(length(min = 1, message = "Secret is required"))]
    pub secret: String,
    /// Display name.
    #[serde(alias = "nombre")]
    #[validate(length(min = 1, max = 200, message = "Display name is required"))]
    pub display_name: String,
}
