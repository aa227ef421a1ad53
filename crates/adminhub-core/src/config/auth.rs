//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// JWT signing algorithm: `"HS256"`, `"HS384"`, or `"HS512"`.
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// Access token TTL in minutes. The cache store enforces expiry with
    /// the same lifetime.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Minimum password length for new passwords.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Access token TTL in seconds, as used for cache entry expiry.
    pub fn access_ttl_seconds(&self) -> u64 {
        self.access_ttl_minutes * 60
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    60 * 24
}

fn default_password_min() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_seconds() {
        let config = AuthConfig {
            jwt_secret: "s".into(),
            jwt_algorithm: "HS256".into(),
            access_ttl_minutes: 15,
            password_min_length: 8,
        };
        assert_eq!(config.access_ttl_seconds(), 900);
    }
}
