//! Per-request authentication: bearer extraction and context binding.

pub mod bearer;
pub mod context;
pub mod request;

pub use bearer::{BEARER_PREFIX, extract_bearer};
pub use context::{Principal, SecurityContext};
pub use request::RequestGate;
