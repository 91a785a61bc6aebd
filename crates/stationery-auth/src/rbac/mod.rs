//! Route-level access control.

pub mod enforcer;
pub mod pattern;
pub mod policies;

pub use enforcer::{AccessDenial, AccessPolicyEvaluator};
pub use pattern::RoutePattern;
pub use policies::{AccessPolicy, AccessPolicyBuilder, AccessRule};
