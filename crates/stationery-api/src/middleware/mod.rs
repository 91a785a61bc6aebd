//! Axum middleware stack.

pub mod access;
pub mod cors;
pub mod gate;
pub mod logging;
