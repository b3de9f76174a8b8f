//! Placeholder screen for CRM sections served by their own views.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::sidebar::nav_item_for_path;

#[component]
pub fn SectionPage() -> impl IntoView {
    let location = use_location();
    let title = move || nav_item_for_path(&location.pathname.get()).map_or("Page not found", |item| item.label);

    view! {
        <div class="section-page">
            <h1 class="section-page__title">{title}</h1>
        </div>
    }
}
