//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain data model; `session_store` owns it together with
//! the durable slot and is the only place that mutates either.

pub mod session;
pub mod session_store;
