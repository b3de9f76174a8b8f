//! REST helpers for the CRM authentication endpoint.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): the HTTP authenticator reports
//! `ApiError::Unavailable` since there is no browser fetch to call.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `ApiError`; the session store collapses
//! all of them into a single "login failed" outcome for the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::User;
#[cfg(feature = "csr")]
use super::types::{LoginRequest, LoginResponse};

/// Errors produced while talking to the authentication endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("login request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("login rejected: {0}")]
    Status(u16),

    /// The response body was not a usable login payload.
    #[error("login response malformed: {0}")]
    Decode(String),

    /// No HTTP client exists in this build.
    #[error("login endpoint not available in this build")]
    Unavailable,
}

/// Credential check against the external CRM API.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Exchange an email/password pair for the account record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails, the server declines the
    /// credentials, or the body is malformed.
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, ApiError>;
}

pub(crate) fn login_endpoint(api_base_url: &str) -> String {
    format!("{}/login", api_base_url.trim_end_matches('/'))
}

/// `POST {api_base_url}/login` over browser fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthenticator {
    api_base_url: String,
}

impl HttpAuthenticator {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self { api_base_url: api_base_url.into() }
    }

    pub fn endpoint(&self) -> String {
        login_endpoint(&self.api_base_url)
    }
}

#[async_trait(?Send)]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint())
                .json(&LoginRequest { email, password })
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            body.into_user()
                .ok_or_else(|| ApiError::Decode("server reported success: false".to_owned()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }
}
