// ============================================================================
// AUTH VIEWMODEL - login, signup and logout flows
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{NotificationSink, Severity};
use crate::state::{AppState, Route};
use crate::stores::SessionGate;

/// Drives the auth forms. Inline error slots carry field-level problems,
/// the notifier carries the transient outcome toasts.
pub struct AuthViewModel {
    gate: Rc<SessionGate>,
    notifier: Rc<dyn NotificationSink>,
    state: AppState,
    login_error: Rc<RefCell<Option<String>>>,
    signup_error: Rc<RefCell<Option<String>>>,
}

impl AuthViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            gate: state.gate.clone(),
            notifier: state.notifier.clone(),
            state: state.clone(),
            login_error: state.login_error.clone(),
            signup_error: state.signup_error.clone(),
        }
    }

    /// Submit the login form. On success the session opens and the app
    /// moves to the dashboard.
    pub fn login(&self, username: &str, password: &str) {
        *self.login_error.borrow_mut() = None;

        if username.is_empty() || password.is_empty() {
            *self.login_error.borrow_mut() =
                Some("Username and password are required.".to_string());
            return;
        }

        match self.gate.login(username, password) {
            Ok(()) => {
                log::info!("✅ [AUTH] Login ok, heading to the dashboard");
                self.notifier
                    .notify("Login successful! Redirecting...", Severity::Success);
                self.state.navigate(Route::Dashboard);
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Login rejected");
                *self.login_error.borrow_mut() = Some(e.message);
                self.notifier.notify("Login failed.", Severity::Error);
            }
        }
    }

    /// Submit the signup form. Account creation is simulated; the only
    /// rule is that both password fields agree.
    pub fn signup(&self, password: &str, confirm_password: &str) {
        *self.signup_error.borrow_mut() = None;

        if password != confirm_password {
            *self.signup_error.borrow_mut() =
                Some("Password and Confirm Password must match!".to_string());
            self.notifier
                .notify("Signup failed: Passwords do not match.", Severity::Error);
            return;
        }

        log::info!("✅ [AUTH] Signup accepted, back to login");
        self.notifier.notify(
            "Account created successfully! Please log in.",
            Severity::Success,
        );
        self.state.navigate(Route::Login);
    }

    /// Close the session and return to the landing page.
    pub fn logout(&self) {
        self.gate.logout();
        self.notifier
            .notify("Logged out successfully.", Severity::Success);
        self.state.navigate(Route::Profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{RecordingSink, ScriptedConfirm};
    use crate::storage::MemoryStorage;

    fn auth_state() -> (AppState, RecordingSink) {
        let sink = RecordingSink::new();
        let state = AppState::with_parts(
            Rc::new(MemoryStorage::new()),
            Rc::new(sink.clone()),
            Rc::new(ScriptedConfirm::answering(true)),
        );
        state.navigate(Route::Login);
        (state, sink)
    }

    #[test]
    fn login_success_toasts_and_opens_the_dashboard() {
        let (state, sink) = auth_state();
        AuthViewModel::new(&state).login("test", "password");

        assert!(state.gate.is_authenticated());
        assert_eq!(state.current_route(), Route::Dashboard);
        assert!(state.login_error.borrow().is_none());
        assert_eq!(
            sink.last(),
            Some((
                "Login successful! Redirecting...".to_string(),
                Severity::Success
            ))
        );
    }

    #[test]
    fn login_with_blank_fields_shows_inline_error_only() {
        let (state, sink) = auth_state();
        AuthViewModel::new(&state).login("", "");

        assert_eq!(
            state.login_error.borrow().as_deref(),
            Some("Username and password are required.")
        );
        assert_eq!(state.current_route(), Route::Login);
        assert!(sink.is_empty());
    }

    #[test]
    fn login_with_bad_credentials_shows_hint_and_error_toast() {
        let (state, sink) = auth_state();
        AuthViewModel::new(&state).login("test", "nope");

        assert_eq!(
            state.login_error.borrow().as_deref(),
            Some("Invalid credentials. Try: test/password")
        );
        assert!(!state.gate.is_authenticated());
        assert_eq!(state.current_route(), Route::Login);
        assert_eq!(
            sink.last(),
            Some(("Login failed.".to_string(), Severity::Error))
        );
    }

    #[test]
    fn retry_after_failed_login_clears_the_stale_error() {
        let (state, _sink) = auth_state();
        let vm = AuthViewModel::new(&state);
        vm.login("test", "nope");
        assert!(state.login_error.borrow().is_some());

        vm.login("test", "password");
        assert!(state.login_error.borrow().is_none());
        assert_eq!(state.current_route(), Route::Dashboard);
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let (state, sink) = auth_state();
        state.navigate(Route::Signup);
        AuthViewModel::new(&state).signup("hunter2", "hunter3");

        assert_eq!(
            state.signup_error.borrow().as_deref(),
            Some("Password and Confirm Password must match!")
        );
        assert_eq!(state.current_route(), Route::Signup);
        assert_eq!(
            sink.last(),
            Some((
                "Signup failed: Passwords do not match.".to_string(),
                Severity::Error
            ))
        );
    }

    #[test]
    fn signup_with_matching_passwords_returns_to_login() {
        let (state, sink) = auth_state();
        state.navigate(Route::Signup);
        AuthViewModel::new(&state).signup("hunter2", "hunter2");

        assert_eq!(state.current_route(), Route::Login);
        assert!(state.signup_error.borrow().is_none());
        assert_eq!(
            sink.last(),
            Some((
                "Account created successfully! Please log in.".to_string(),
                Severity::Success
            ))
        );
        // Signing up never opens a session by itself.
        assert!(!state.gate.is_authenticated());
    }

    #[test]
    fn logout_closes_the_session_and_lands_on_the_profile() {
        let (state, sink) = auth_state();
        let vm = AuthViewModel::new(&state);
        vm.login("test", "password");

        vm.logout();
        assert!(!state.gate.is_authenticated());
        assert_eq!(state.current_route(), Route::Profile);
        assert_eq!(
            sink.last(),
            Some(("Logged out successfully.".to_string(), Severity::Success))
        );
    }

    #[test]
    fn logout_without_a_session_still_toasts() {
        let (state, sink) = auth_state();
        AuthViewModel::new(&state).logout();

        assert_eq!(
            sink.last(),
            Some(("Logged out successfully.".to_string(), Severity::Success))
        );
        assert_eq!(state.current_route(), Route::Profile);
    }
}
