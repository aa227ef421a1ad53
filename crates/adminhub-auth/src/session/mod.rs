//! Session token lifecycle management.

pub mod manager;

pub use manager::{IssuedToken, SessionManager};
