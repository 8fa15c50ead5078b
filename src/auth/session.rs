//! Bearer-token session tracking with absolute expiry.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use uuid::Uuid;

/// One authenticated administrative session.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub username: String,
    pub issued_at: SystemTime,
    pub expires_at: SystemTime,
}

/// In-memory token store. Sessions expire at an absolute deadline and are
/// dropped lazily on the next lookup.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, AuthSession>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Issue a fresh token for `username`.
    pub fn issue(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        let now = SystemTime::now();
        let session = AuthSession {
            username: username.to_string(),
            issued_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions
            .lock()
            .expect("session store poisoned")
            .insert(token.clone(), session);
        token
    }

    /// Look up a token, removing it when expired.
    pub fn validate(&self, token: &str) -> Option<AuthSession> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        match sessions.get(token) {
            Some(session) if SystemTime::now() >= session.expires_at => {
                sessions.remove(token);
                None
            }
            Some(session) => Some(session.clone()),
            None => None,
        }
    }

    /// Drop a token. Returns whether it existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions
            .lock()
            .expect("session store poisoned")
            .remove(token)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_validate() {
        let store = SessionStore::new(Duration::from_secs(7200));
        let token = store.issue("root");

        let session = store.validate(&token).expect("fresh session is valid");
        assert_eq!(session.username, "root");
        assert_eq!(session.expires_at, session.issued_at + Duration::from_secs(7200));
    }

    #[test]
    fn test_unknown_token_invalid() {
        let store = SessionStore::new(Duration::from_secs(7200));
        assert!(store.validate("not-a-token").is_none());
    }

    #[test]
    fn test_expired_session_removed() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.issue("root");

        assert!(store.validate(&token).is_none());
        // Removed on first lookup, so revoking afterwards finds nothing.
        assert!(!store.revoke(&token));
    }

    #[test]
    fn test_revocation() {
        let store = SessionStore::new(Duration::from_secs(7200));
        let token = store.issue("root");

        assert!(store.revoke(&token));
        assert!(store.validate(&token).is_none());
        assert!(!store.revoke(&token));
    }
}
