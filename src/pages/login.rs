//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits credentials through the session store. On success the route guard
//! moves the user off `/login`; this page never navigates itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::api::{Authenticator, HttpAuthenticator};

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";
pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Authenticating..." } else { "Sign In to Dashboard" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let authenticator = expect_context::<HttpAuthenticator>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let authenticator = authenticator.clone();
        leptos::task::spawn_local(async move {
            let outcome = authenticator.authenticate(&email_value, &password_value).await;
            let signed_in = session.try_update(|s| s.complete_login(outcome)).unwrap_or(false);
            if !signed_in {
                error.set(LOGIN_FAILED_MESSAGE.to_owned());
                busy.set(false);
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SERP Hawk CRM"</h1>
                <p class="login-card__subtitle">"Elevate your growth strategy"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">"Email Address"</label>
                    <input
                        class="login-input"
                        type="email"
                        required
                        placeholder="name@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label">"Password"</label>
                    <input
                        class="login-input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
            <p class="login-footer">"Authorized access only."</p>
        </div>
    }
}
