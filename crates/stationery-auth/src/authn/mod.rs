//! Credential verification and per-request identity loading.

pub mod authenticator;
pub mod store;

pub use authenticator::{Authenticator, AuthnError};
pub use store::{CredentialStore, IdentityLoader, IdentityRegistry, LoadedIdentity, StoreIdentityLoader};
