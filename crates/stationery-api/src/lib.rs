//! # stationery-api
//!
//! HTTP API layer for the stationery backend built on Axum.
//!
//! Every request passes request logging, then the request gate (which binds
//! a `SecurityContext`), then the access policy, before reaching a handler.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod router;
pub mod state;

pub use app::{bootstrap, build_app, run_server};
pub use state::AppState;
