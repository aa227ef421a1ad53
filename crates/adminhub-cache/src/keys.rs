//! Cache key builders for all AdminHub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses. The global `adminhub:`
//! prefix is applied by the provider, not here.

use uuid::Uuid;

/// Key under which a session's signed token is stored.
///
/// One key per live session; the value is the raw signed token string.
pub fn session_token(session_id: Uuid) -> String {
    format!("token:{session_id}")
}

/// Pattern matching every stored session token.
pub fn session_token_pattern() -> &'static str {
    "token:*"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_key() {
        let id = Uuid::nil();
        assert_eq!(
            session_token(id),
            "token:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_pattern_matches_key_prefix() {
        let key = session_token(Uuid::nil());
        let prefix = session_token_pattern().trim_end_matches('*');
        assert!(key.starts_with(prefix));
    }
}
