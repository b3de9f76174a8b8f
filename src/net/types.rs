//! Wire DTOs for the CRM authentication API.
//!
//! DESIGN
//! ======
//! `User` doubles as the persisted session record, so the JSON written to
//! `localStorage` is exactly the `user` object the login endpoint returns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Permission level attached to a CRM account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
    /// Fallback role reported while nobody is signed in.
    #[default]
    Client,
    Intern,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Employee, Role::Client, Role::Intern];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
            Self::Client => "Client",
            Self::Intern => "Intern",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed-in CRM account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub user: User,
}

impl LoginResponse {
    /// Extract the user unless the server explicitly reported `success: false`.
    pub fn into_user(self) -> Option<User> {
        (self.success != Some(false)).then_some(self.user)
    }
}
