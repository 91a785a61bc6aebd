//! # stationery-entity
//!
//! Data model for principals and the roles they hold. Every struct in this
//! crate derives `Debug`, `Clone`, `Serialize` and `Deserialize`.
//!
//! The Identity → Role relation is owned by [`Identity`]: it stores a set of
//! [`RoleName`]s, never role objects. The inverse direction (who holds a role)
//! is a query on the credential store, so there is no cyclic ownership.

pub mod identity;
pub mod role;

pub use identity::{Identity, NewIdentity, normalize_identifier};
pub use role::{Role, RoleName};
