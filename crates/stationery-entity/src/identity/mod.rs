//! Identity domain entities.

pub mod model;

pub use model::{Identity, NewIdentity, normalize_identifier};
