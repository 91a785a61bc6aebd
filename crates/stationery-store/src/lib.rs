//! # stationery-store
//!
//! In-memory repositories for identities and roles, plus the first-run
//! bootstrap and demo-data seeding. [`IdentityRepository`] is the
//! credential store the authentication flow reads from.

pub mod repositories;
pub mod seed;

pub use repositories::{IdentityRepository, RoleRepository};
pub use seed::DataSeeder;
