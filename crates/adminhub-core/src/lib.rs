//! # adminhub-core
//!
//! Core crate for AdminHub. Contains traits, configuration schemas,
//! pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other AdminHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
