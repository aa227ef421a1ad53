//! Core traits defined in `adminhub-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
