//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API origin
//! is baked in from `CRM_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `localStorage` slot holding the serialized signed-in user.
pub const SESSION_STORAGE_KEY: &str = "crm_user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage_key: String,
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `CRM_API_BASE_URL`: default `http://localhost:8000`
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("CRM_API_BASE_URL"))
    }

    fn from_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url, storage_key: SESSION_STORAGE_KEY.to_owned() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_base_url(None)
    }
}
