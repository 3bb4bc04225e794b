// ============================================================================
// SESSION GATE - presence-of-a-key authentication
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::storage::StorageBackend;
use crate::utils::constants::{LOGIN_PASS, LOGIN_USER, SESSION_KEY};

/// Bad credentials on login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthError {
    pub message: String,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}

/// Guards the session flag. A session is authenticated iff the session key
/// exists in storage, whatever its value.
pub struct SessionGate {
    storage: Rc<dyn StorageBackend>,
}

impl SessionGate {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.get_item(SESSION_KEY).is_some()
    }

    /// Accept exactly the one demo credential pair. On success a fresh
    /// timestamped token lands in the session key; on failure the key is
    /// left exactly as it was.
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username == LOGIN_USER && password == LOGIN_PASS {
            let token = format!("token-{}", chrono::Utc::now().timestamp_millis());
            if let Err(e) = self.storage.set_item(SESSION_KEY, &token) {
                log::error!("❌ Failed to store session token: {}", e);
                return Err(AuthError {
                    message: "Could not start a session in this browser.".to_string(),
                });
            }
            log::info!("🔓 Session opened for '{}'", username);
            Ok(())
        } else {
            Err(AuthError {
                message: format!("Invalid credentials. Try: {}/{}", LOGIN_USER, LOGIN_PASS),
            })
        }
    }

    /// Drop the session key. Safe to call with no session open.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove_item(SESSION_KEY) {
            log::error!("❌ Failed to clear session token: {}", e);
        }
        log::info!("🔒 Session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn gate_with(storage: &MemoryStorage) -> SessionGate {
        SessionGate::new(Rc::new(storage.clone()))
    }

    #[test]
    fn starts_unauthenticated() {
        let storage = MemoryStorage::new();
        assert!(!gate_with(&storage).is_authenticated());
    }

    #[test]
    fn login_with_demo_credentials_opens_the_session() {
        let storage = MemoryStorage::new();
        let gate = gate_with(&storage);

        gate.login("test", "password").unwrap();
        assert!(gate.is_authenticated());

        let token = storage.get_item(SESSION_KEY).unwrap();
        assert!(token.starts_with("token-"));
    }

    #[test]
    fn login_rejects_wrong_credentials_with_the_hint_message() {
        let storage = MemoryStorage::new();
        let gate = gate_with(&storage);

        let err = gate.login("test", "wrong").unwrap_err();
        assert_eq!(err.message, "Invalid credentials. Try: test/password");
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn failed_login_leaves_an_existing_session_alone() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "token-123").unwrap();
        let gate = gate_with(&storage);

        assert!(gate.login("admin", "admin").is_err());
        assert_eq!(storage.get_item(SESSION_KEY), Some("token-123".to_string()));
        assert!(gate.is_authenticated());
    }

    #[test]
    fn any_token_value_counts_as_authenticated() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "").unwrap();
        assert!(gate_with(&storage).is_authenticated());
    }

    #[test]
    fn logout_clears_the_session_and_is_idempotent() {
        let storage = MemoryStorage::new();
        let gate = gate_with(&storage);
        gate.login("test", "password").unwrap();

        gate.logout();
        assert!(!gate.is_authenticated());

        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn relogin_after_logout_issues_a_fresh_token() {
        let storage = MemoryStorage::new();
        let gate = gate_with(&storage);

        gate.login("test", "password").unwrap();
        gate.logout();
        gate.login("test", "password").unwrap();
        assert!(gate.is_authenticated());
    }

    #[test]
    fn relogin_over_an_open_session_replaces_the_token() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "token-old").unwrap();
        let gate = gate_with(&storage);

        gate.login("test", "password").unwrap();
        assert_ne!(storage.get_item(SESSION_KEY).unwrap(), "token-old");
        assert!(gate.is_authenticated());
    }
}
