//! Top bar with the signed-in identity badge.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::app::AppSession;

/// Label shown for `email`; `"Guest"` when nobody is signed in.
pub fn display_email(email: &str) -> &str {
    if email.is_empty() { "Guest" } else { email }
}

/// Uppercased first character of `email`, `'G'` for guests.
pub fn avatar_initial(email: &str) -> char {
    email
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('G')
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let email = move || session.with(|s| display_email(s.state().email()).to_owned());
    let initial = move || session.with(|s| avatar_initial(s.state().email()).to_string());
    let role = move || session.with(|s| s.state().role().to_string());

    view! {
        <header class="header">
            <div class="header__identity">
                <div class="header__identity-text">
                    <span class="header__email">{email}</span>
                    <span class="header__role">{role}</span>
                </div>
                <div class="header__avatar">{initial}</div>
            </div>
        </header>
    }
}
