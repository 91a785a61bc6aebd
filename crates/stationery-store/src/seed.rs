//! Demo-data seeding.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use stationery_auth::PasswordHasher;
use stationery_core::config::SeedConfig;
use stationery_core::result::AppResult;
use stationery_entity::{NewIdentity, RoleName};

use crate::repositories::IdentityRepository;

/// One demo account per storefront role.
const DEMO_IDENTITIES: [(&str, &str, RoleName); 3] = [
    ("customer@test.com", "Test Customer", RoleName::CUSTOMER),
    ("employee@test.com", "Test Employee", RoleName::EMPLOYEE),
    ("manager@test.com", "Test Manager", RoleName::MANAGER),
];

/// Creates demo identities on an empty store when enabled.
#[derive(Debug)]
pub struct DataSeeder {
    identities: Arc<IdentityRepository>,
    hasher: PasswordHasher,
    config: SeedConfig,
}

impl DataSeeder {
    pub fn new(identities: Arc<IdentityRepository>, hasher: PasswordHasher, config: SeedConfig) -> Self {
        Self {
            identities,
            hasher,
            config,
        }
    }

    /// Seed the demo identities. Returns how many were created; zero when
    /// seeding is disabled or the store already holds identities.
    pub fn seed(&self) -> AppResult<usize> {
        if !self.config.demo_identities {
            return Ok(0);
        }
        if self.identities.count() > 0 {
            info!("Identity store not empty; skipping demo seed");
            return Ok(0);
        }

        for (identifier, display_name, role) in DEMO_IDENTITIES {
            self.identities.create(NewIdentity {
                identifier: identifier.to_string(),
                secret_hash: self.hasher.hash_password(&self.config.demo_secret)?,
                display_name: display_name.to_string(),
                roles: BTreeSet::from([role]),
            })?;
            info!(identifier, "Seeded demo identity");
        }

        Ok(DEMO_IDENTITIES.len())
    }
}
