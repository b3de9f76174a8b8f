//! Networking modules for the external CRM REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the authentication call and `types` defines the shared wire
//! schema.

pub mod api;
pub mod types;
