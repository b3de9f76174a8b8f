//! Route guarding driven by session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application shell installs one guard inside the router. It is the
//! only code that navigates in response to sign-in and sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionPhase, SessionState};
use crate::state::session_store::SessionStore;
use crate::util::storage::SessionStorage;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Strip trailing slashes so `/login/` and `/login` compare equal.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Where the router must go for `state` at `current_path`, if anywhere.
///
/// No decision is made while the persisted session is still being restored.
pub fn decide_redirect(state: &SessionState, current_path: &str) -> Option<&'static str> {
    let on_login = normalize_path(current_path) == LOGIN_PATH;
    match state.phase() {
        SessionPhase::Initializing => None,
        SessionPhase::Unauthenticated if !on_login => Some(LOGIN_PATH),
        SessionPhase::Authenticated if on_login => Some(HOME_PATH),
        SessionPhase::Unauthenticated | SessionPhase::Authenticated => None,
    }
}

/// `decide_redirect` that issues each redirect at most once per
/// (phase, path) pair, so re-evaluating a stable state is silent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    last_issued: Option<(SessionPhase, String)>,
}

impl RouteGuard {
    pub fn evaluate(&mut self, state: &SessionState, current_path: &str) -> Option<&'static str> {
        let key = (state.phase(), normalize_path(current_path).to_owned());
        let Some(target) = decide_redirect(state, current_path) else {
            self.last_issued = None;
            return None;
        };
        if self.last_issued.as_ref() == Some(&key) {
            return None;
        }
        self.last_issued = Some(key);
        Some(target)
    }
}

/// Re-run the guard whenever the session or the pathname changes.
pub fn install_route_guard<S, F>(session: RwSignal<SessionStore<S>>, pathname: Memo<String>, navigate: F)
where
    S: SessionStorage + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut guard = RouteGuard::default();
    Effect::new(move || {
        let path = pathname.get();
        let target = session.with(|s| guard.evaluate(s.state(), &path));
        if let Some(target) = target {
            log::debug!("route guard: {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
