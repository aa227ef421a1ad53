//! Login, logout, and authenticate-by-token orchestration.

pub mod identity;
pub mod service;

pub use identity::{DbIdentitySource, IdentitySource};
pub use service::{AuthGateway, AuthenticatedUser, LoginOutcome, UserInfo};
