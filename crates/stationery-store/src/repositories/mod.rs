//! Repository implementations for identities and roles.

pub mod identity;
pub mod role;

pub use identity::IdentityRepository;
pub use role::RoleRepository;
