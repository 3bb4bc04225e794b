// ============================================================================
// ROUTE GUARD - keeps the dashboard behind the session gate
// ============================================================================

use std::rc::Rc;

use crate::services::{NotificationSink, Severity};
use crate::state::{AppState, Route};
use crate::stores::SessionGate;

/// Outcome of one guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Denied,
}

/// Evaluated once per navigation attempt at a protected route. A denial
/// warns the user and falls back to the login view.
pub struct RouteGuard {
    gate: Rc<SessionGate>,
    notifier: Rc<dyn NotificationSink>,
}

impl RouteGuard {
    pub fn new(state: &AppState) -> Self {
        Self {
            gate: state.gate.clone(),
            notifier: state.notifier.clone(),
        }
    }

    /// Single synchronous check against the session gate.
    pub fn check(&self) -> GuardDecision {
        if self.gate.is_authenticated() {
            GuardDecision::Allowed
        } else {
            log::error!("🚫 Unauthorized access detected. Redirecting.");
            self.notifier.notify(
                "Your session has expired — please log in again.",
                Severity::Error,
            );
            GuardDecision::Denied
        }
    }

    /// Route actually rendered for a navigation request. Unprotected
    /// routes pass through untouched and never trigger a check.
    pub fn resolve(&self, requested: Route) -> Route {
        if !requested.is_protected() {
            return requested;
        }
        match self.check() {
            GuardDecision::Allowed => requested,
            GuardDecision::Denied => Route::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{RecordingSink, ScriptedConfirm};
    use crate::storage::MemoryStorage;

    fn guarded_state() -> (AppState, RecordingSink) {
        let sink = RecordingSink::new();
        let state = AppState::with_parts(
            Rc::new(MemoryStorage::new()),
            Rc::new(sink.clone()),
            Rc::new(ScriptedConfirm::answering(true)),
        );
        (state, sink)
    }

    #[test]
    fn denied_without_a_session_and_redirected_to_login() {
        let (state, sink) = guarded_state();
        let guard = RouteGuard::new(&state);

        assert_eq!(guard.resolve(Route::Dashboard), Route::Login);
        assert_eq!(
            sink.last(),
            Some((
                "Your session has expired — please log in again.".to_string(),
                Severity::Error
            ))
        );
    }

    #[test]
    fn allowed_with_an_open_session_and_silent() {
        let (state, sink) = guarded_state();
        state.gate.login("test", "password").unwrap();
        let guard = RouteGuard::new(&state);

        assert_eq!(guard.resolve(Route::Dashboard), Route::Dashboard);
        assert!(sink.is_empty());
    }

    #[test]
    fn unprotected_routes_skip_the_check_entirely() {
        let (state, sink) = guarded_state();
        let guard = RouteGuard::new(&state);

        assert_eq!(guard.resolve(Route::Profile), Route::Profile);
        assert_eq!(guard.resolve(Route::Login), Route::Login);
        assert_eq!(guard.resolve(Route::Signup), Route::Signup);
        assert!(sink.is_empty());
    }

    #[test]
    fn denied_again_after_logout() {
        let (state, sink) = guarded_state();
        state.gate.login("test", "password").unwrap();
        let guard = RouteGuard::new(&state);
        assert_eq!(guard.resolve(Route::Dashboard), Route::Dashboard);

        state.gate.logout();
        assert_eq!(guard.resolve(Route::Dashboard), Route::Login);
        assert_eq!(sink.messages().len(), 1);
    }
}
