//! The single owner of session state and its durable copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one store per running client and provides it through
//! Leptos context. `restore`, `login`, and `logout` are the only paths that
//! mutate the session or write the persisted record, which keeps the
//! in-memory and durable copies consistent.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. A corrupt record degrades to signed-out, a failed
//! login leaves state untouched and reports `false`, and storage write
//! failures are logged without revoking the in-memory session.
//!
//! The store performs no navigation. The route guard reacts to the state it
//! leaves behind.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::api::{ApiError, Authenticator};
use crate::net::types::User;
use crate::state::session::SessionState;
use crate::util::storage::SessionStorage;

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// New store in the `Initializing` phase. Call [`Self::restore`] once.
    pub fn new(storage: S) -> Self {
        Self { state: SessionState::default(), storage }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted record and leave `Initializing`.
    ///
    /// Absent or malformed records yield a signed-out session; malformed ones
    /// are also erased. A second call is a no-op.
    pub fn restore(&mut self) {
        if !self.state.loading() {
            log::debug!("session: restore already completed");
            return;
        }
        let user = self.storage.load().and_then(|raw| match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("session: discarding malformed persisted record: {e}");
                if let Err(e) = self.storage.clear() {
                    log::warn!("session: could not erase malformed record: {e}");
                }
                None
            }
        });
        match &user {
            Some(u) => log::info!("session: restored {} ({})", u.email, u.role),
            None => log::debug!("session: no persisted session"),
        }
        self.state.finish_restore(user);
    }

    /// One authentication attempt. Returns whether the user is now signed in.
    pub async fn login<A>(&mut self, authenticator: &A, email: &str, password: &str) -> bool
    where
        A: Authenticator + ?Sized,
    {
        let outcome = authenticator.authenticate(email, password).await;
        self.complete_login(outcome)
    }

    /// Apply the result of an authentication call made elsewhere.
    ///
    /// On `Ok` the user is signed in and written through to storage; on `Err`
    /// the state is left unchanged.
    pub fn complete_login(&mut self, outcome: Result<User, ApiError>) -> bool {
        let user = match outcome {
            Ok(user) => user,
            Err(e) => {
                log::warn!("session: login failed: {e}");
                return false;
            }
        };
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.storage.save(&raw) {
                    log::warn!("session: could not persist session: {e}");
                }
            }
            Err(e) => log::warn!("session: could not serialize session: {e}"),
        }
        log::info!("session: signed in {} ({})", user.email, user.role);
        self.state.sign_in(user);
        true
    }

    /// Sign out and erase the persisted record. Safe to call when signed out.
    pub fn logout(&mut self) {
        if let Some(user) = self.state.sign_out() {
            log::info!("session: signed out {}", user.email);
        }
        if let Err(e) = self.storage.clear() {
            log::warn!("session: could not erase persisted session: {e}");
        }
    }
}
