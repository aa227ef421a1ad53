//! # adminhub-auth
//!
//! Authentication and session lifecycle for AdminHub.
//!
//! ## Modules
//!
//! - `jwt` — signed token creation and local validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `token` — cache-backed token store with scan-based revocation
//! - `session` — the session token state machine (issue / validate / revoke)
//! - `gateway` — login, logout, and authenticate-by-token orchestration

pub mod gateway;
pub mod jwt;
pub mod password;
pub mod session;
pub mod token;

pub use gateway::{AuthGateway, AuthenticatedUser, IdentitySource, LoginOutcome, UserInfo};
pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{IssuedToken, SessionManager};
pub use token::TokenStore;
