//! # stationery-core
//!
//! Core crate for the stationery backend. Contains the configuration
//! schemas and loader, and the unified error system shared by every
//! other crate.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
