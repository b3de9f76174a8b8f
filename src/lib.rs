//! # crm-client
//!
//! Leptos + WASM frontend shell for the SERP Hawk CRM.
//!
//! This crate owns the browser session: it restores the signed-in user from
//! `localStorage`, signs users in against the CRM API, and guards every route
//! so protected views are unreachable without a session. Record pages talk to
//! the API on their own and only read the session from context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, and mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
