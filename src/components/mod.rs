//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Application chrome that reads the session from Leptos context.

pub mod header;
pub mod sidebar;
