//! Authenticated landing route.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::sidebar::nav_items_for;
use crate::util::auth::HOME_PATH;

/// Greets the signed-in user and links the sections their role can open.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let greeting = move || {
        session.with(|s| {
            s.state()
                .user()
                .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome back, {}", u.name))
        })
    };
    let role = move || session.with(|s| s.state().role().to_string());
    let sections = move || {
        session.with(|s| nav_items_for(s.state().role()))
            .into_iter()
            .filter(|item| item.href != HOME_PATH)
            .map(|item| {
                view! {
                    <li class="dashboard__section">
                        <a href=item.href>{item.label}</a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">{greeting}</h1>
            <p class="dashboard__role">"Signed in as " {role}</p>
            <ul class="dashboard__sections">{sections}</ul>
        </div>
    }
}
