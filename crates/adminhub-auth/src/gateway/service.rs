//! The auth gateway — orchestrates the login, logout, and
//! authenticate-by-token flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use adminhub_core::error::AppError;
use adminhub_core::result::AppResult;
use adminhub_entity::user::User;

use crate::jwt::{Claims, TokenDecoder};
use crate::password::PasswordHasher;
use crate::session::SessionManager;

use super::identity::IdentitySource;

/// The one client-visible message for unknown-email and wrong-password
/// failures. Internal logs distinguish the causes; responses must not,
/// to avoid user enumeration.
const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Client-visible message for disabled accounts.
const ACCOUNT_DISABLED: &str = "account disabled";

/// The one client-visible message for every token-authentication failure
/// (malformed, expired, superseded, unknown subject).
const INVALID_TOKEN: &str = "invalid authentication credentials";

/// Composite user projection returned alongside a fresh token at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub user_name: String,
    /// Email address.
    pub email: String,
    /// Department reference.
    pub department_id: Uuid,
    /// Role reference.
    pub role_id: Uuid,
    /// Resolved department name.
    pub department_name: String,
    /// Resolved role name.
    pub role_name: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The raw signed token string.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user's projection.
    pub user: UserInfo,
}

/// A request identity resolved from a presented bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The user row as currently stored.
    pub user: User,
    /// The validated token claims.
    pub claims: Claims,
}

/// Orchestrates credential verification and the session lifecycle.
#[derive(Clone)]
pub struct AuthGateway {
    /// Read-only identity lookups.
    identity: Arc<dyn IdentitySource>,
    /// Credential verification capability.
    hasher: Arc<PasswordHasher>,
    /// The token state machine.
    sessions: Arc<SessionManager>,
    /// Local token verification (signature + expiry).
    decoder: Arc<TokenDecoder>,
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("sessions", &self.sessions)
            .finish()
    }
}

impl AuthGateway {
    /// Creates a new auth gateway.
    pub fn new(
        identity: Arc<dyn IdentitySource>,
        hasher: Arc<PasswordHasher>,
        sessions: Arc<SessionManager>,
        decoder: Arc<TokenDecoder>,
    ) -> Self {
        Self {
            identity,
            hasher,
            sessions,
            decoder,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Look up the user by email
    /// 2. Verify the password
    /// 3. Check the account is enabled
    /// 4. Revoke every previous session (single-active-session policy);
    ///    a store failure here aborts the login
    /// 5. Issue and persist a new token
    /// 6. Resolve the department and role names into the user projection
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .identity
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!(email, "Login rejected: unknown email");
                AppError::authentication(INVALID_CREDENTIALS)
            })?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        if !user.can_login() {
            warn!(user_id = %user.id, "Login rejected: account disabled");
            return Err(AppError::authentication(ACCOUNT_DISABLED));
        }

        // Strictly sequenced before issue: stale sessions must be gone
        // before a new one exists.
        self.sessions.revoke_all(user.id).await?;
        let issued = self.sessions.issue(user.id).await?;

        let department_name = self.identity.department_name(user.department_id).await?;
        let role_name = self.identity.role_name(user.role_id).await?;
        let (Some(department_name), Some(role_name)) = (department_name, role_name) else {
            return Err(AppError::business("inconsistent user record"));
        };

        info!(user_id = %user.id, session_id = %issued.session_id, "Login successful");

        Ok(LoginOutcome {
            token: issued.token,
            expires_at: issued.expires_at,
            user: UserInfo {
                id: user.id,
                user_name: user.user_name,
                email: user.email,
                department_id: user.department_id,
                role_id: user.role_id,
                department_name,
                role_name,
                avatar_url: user.avatar_url,
            },
        })
    }

    /// Revokes the session carried by the presented token. Idempotent;
    /// only a store outage surfaces as an error.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.sessions.revoke(token).await
    }

    /// Resolves the current user from a presented bearer token.
    ///
    /// Signature and expiry are checked locally first (cheap), then the
    /// store is consulted (one round-trip), then the user row is loaded
    /// and re-checked for a disabled status. All failures are
    /// authentication errors with one generic message.
    pub async fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self
            .decoder
            .decode(token)
            .map_err(|_| AppError::authentication(INVALID_TOKEN))?;

        if !self.sessions.validate(claims.sub, token).await? {
            return Err(AppError::authentication(INVALID_TOKEN));
        }

        let user = self
            .identity
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication(INVALID_TOKEN))?;

        if !user.can_login() {
            warn!(user_id = %user.id, "Token rejected: account disabled since issuance");
            return Err(AppError::authentication(ACCOUNT_DISABLED));
        }

        Ok(AuthenticatedUser { user, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use adminhub_cache::memory::MemoryCacheProvider;
    use adminhub_cache::provider::CacheManager;
    use adminhub_core::config::auth::AuthConfig;
    use adminhub_core::config::cache::MemoryCacheConfig;
    use adminhub_core::error::ErrorKind;
    use adminhub_entity::status::EntityStatus;

    use crate::jwt::TokenEncoder;
    use crate::token::TokenStore;

    /// In-memory identity source for gateway tests.
    struct StubIdentity {
        users: Vec<User>,
        departments: HashMap<Uuid, String>,
        roles: HashMap<Uuid, String>,
    }

    #[async_trait]
    impl IdentitySource for StubIdentity {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self.users.iter().find(|u| u.email == email).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn department_name(&self, department_id: Uuid) -> AppResult<Option<String>> {
            Ok(self.departments.get(&department_id).cloned())
        }

        async fn role_name(&self, role_id: Uuid) -> AppResult<Option<String>> {
            Ok(self.roles.get(&role_id).cloned())
        }
    }

    struct Fixture {
        gateway: AuthGateway,
        sessions: Arc<SessionManager>,
        store: Arc<TokenStore>,
        user: User,
    }

    fn fixture_with(status: EntityStatus, wire_department: bool) -> Fixture {
        let config = AuthConfig {
            jwt_secret: "gateway-test-secret".into(),
            jwt_algorithm: "HS256".into(),
            access_ttl_minutes: 15,
            password_min_length: 8,
        };

        let hasher = Arc::new(PasswordHasher::new());
        let department_id = Uuid::new_v4();
        let role_id = Uuid::new_v4();
        let user = User {
            id: Uuid::new_v4(),
            user_name: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: hasher.hash_password("correct-password").unwrap(),
            department_id,
            role_id,
            avatar_url: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let mut departments = HashMap::new();
        if wire_department {
            departments.insert(department_id, "Engineering".to_string());
        }
        let mut roles = HashMap::new();
        roles.insert(role_id, "Administrator".to_string());

        let identity = Arc::new(StubIdentity {
            users: vec![user.clone()],
            departments,
            roles,
        });

        let cache = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&MemoryCacheConfig::default(), 300),
        )));
        let encoder = Arc::new(TokenEncoder::new(&config).unwrap());
        let decoder = Arc::new(TokenDecoder::new(&config).unwrap());
        let store = Arc::new(TokenStore::new(cache, Arc::clone(&decoder), &config));
        let sessions = Arc::new(SessionManager::new(
            encoder,
            Arc::clone(&decoder),
            Arc::clone(&store),
        ));

        let gateway = AuthGateway::new(identity, hasher, Arc::clone(&sessions), decoder);
        Fixture {
            gateway,
            sessions,
            store,
            user,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(EntityStatus::Enabled, true)
    }

    #[tokio::test]
    async fn test_login_success_resolves_names_and_token_validates() {
        let fx = fixture();
        let outcome = fx
            .gateway
            .login("alice@example.com", "correct-password")
            .await
            .unwrap();

        assert_eq!(outcome.user.department_name, "Engineering");
        assert_eq!(outcome.user.role_name, "Administrator");
        assert!(fx
            .sessions
            .validate(fx.user.id, &outcome.token)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_login_wrong_password_leaves_store_untouched() {
        let fx = fixture();
        let err = fx
            .gateway
            .login("alice@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_CREDENTIALS);
        assert!(fx.store.scan().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_unknown_email_uses_same_message() {
        let fx = fixture();
        let err = fx
            .gateway
            .login("nobody@example.com", "correct-password")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_login_disabled_account_rejected_despite_correct_password() {
        let fx = fixture_with(EntityStatus::Disabled, true);
        let err = fx
            .gateway
            .login("alice@example.com", "correct-password")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, ACCOUNT_DISABLED);
        assert!(fx.store.scan().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_login_invalidates_first_token() {
        let fx = fixture();
        let first = fx
            .gateway
            .login("alice@example.com", "correct-password")
            .await
            .unwrap();
        let second = fx
            .gateway
            .login("alice@example.com", "correct-password")
            .await
            .unwrap();

        assert!(!fx.sessions.validate(fx.user.id, &first.token).await.unwrap());
        assert!(fx
            .sessions
            .validate(fx.user.id, &second.token)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_login_missing_department_is_a_business_error() {
        let fx = fixture_with(EntityStatus::Enabled, false);
        let err = fx
            .gateway
            .login("alice@example.com", "correct-password")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Business);
    }

    #[tokio::test]
    async fn test_authenticate_round_trip() {
        let fx = fixture();
        let outcome = fx
            .gateway
            .login("alice@example.com", "correct-password")
            .await
            .unwrap();

        let authed = fx.gateway.authenticate(&outcome.token).await.unwrap();
        assert_eq!(authed.user.id, fx.user.id);
        assert_eq!(authed.claims.sub, fx.user.id);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage_and_logged_out_tokens() {
        let fx = fixture();
        let outcome = fx
            .gateway
            .login("alice@example.com", "correct-password")
            .await
            .unwrap();

        let err = fx.gateway.authenticate("garbage").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_TOKEN);

        fx.gateway.logout(&outcome.token).await.unwrap();
        let err = fx.gateway.authenticate(&outcome.token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_TOKEN);

        // Logout stays idempotent after the fact.
        fx.gateway.logout(&outcome.token).await.unwrap();
    }
}
