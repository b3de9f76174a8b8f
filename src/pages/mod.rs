//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages read the session from context and delegate chrome to `components`.
//! None of them redirect; the shell's route guard owns navigation.

pub mod dashboard;
pub mod login;
pub mod section;
