//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard, the application shell, and every role-aware
//! component. Mutated only through `SessionStore`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// Where the session sits in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Persisted record not yet checked.
    Initializing,
    Unauthenticated,
    Authenticated,
}

/// Signed-in identity plus restore status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the signed-in user, or [`Role::Client`] when signed out.
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or_else(Role::default, |u| u.role)
    }

    /// Email of the signed-in user, or `""` when signed out.
    pub fn email(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.email.as_str())
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.loading, self.is_authenticated()) {
            (true, _) => SessionPhase::Initializing,
            (false, false) => SessionPhase::Unauthenticated,
            (false, true) => SessionPhase::Authenticated,
        }
    }

    /// Leave `Initializing`. Returns `false` if restore already finished.
    pub(crate) fn finish_restore(&mut self, user: Option<User>) -> bool {
        if !self.loading {
            return false;
        }
        self.user = user;
        self.loading = false;
        true
    }

    pub(crate) fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Returns the user that was signed out, if any.
    pub(crate) fn sign_out(&mut self) -> Option<User> {
        self.user.take()
    }
}
