//! Demo-data seeding configuration.

use serde::{Deserialize, Serialize};

/// Controls the first-run creation of demo identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Create one demo identity per staff role when the store is empty.
    #[serde(default)]
    pub demo_identities: bool,
    /// Plaintext secret given to every demo identity.
    #[serde(default = "default_demo_secret")]
    pub demo_secret: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_identities: false,
            demo_secret: default_demo_secret(),
        }
    }
}

fn default_demo_secret() -> String {
    "password123".to_string()
}
