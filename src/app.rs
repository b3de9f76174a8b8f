//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one session store for this client instance and injects
//! it through context. `AppShell` lives inside the router so it can watch the
//! pathname, install the route guard, and pick the loading, login, or
//! application layout.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{header::Header, sidebar::Sidebar};
use crate::config::ClientConfig;
use crate::net::api::HttpAuthenticator;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, section::SectionPage};
use crate::state::session::SessionPhase;
use crate::state::session_store::SessionStore;
use crate::util::auth::{LOGIN_PATH, install_route_guard, normalize_path};
use crate::util::storage::BrowserStorage;

/// Context handle every view uses to read or mutate the session.
pub type AppSession = RwSignal<SessionStore<BrowserStorage>>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session: AppSession = RwSignal::new(SessionStore::new(BrowserStorage::new(config.storage_key.clone())));
    let authenticator = HttpAuthenticator::new(config.api_base_url.clone());
    log::debug!("crm client starting against {}", config.api_base_url);

    provide_context(authenticator);
    provide_context(session);

    // Runs once after mount; the shell shows the loading state until then.
    Effect::new(move || session.update(SessionStore::restore));

    view! {
        <Title text="SERP Hawk CRM"/>
        <Router>
            <AppShell/>
        </Router>
    }
}

/// Which layout the shell renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShellLayout {
    /// Restore pending, or a redirect to `/login` is in flight.
    Loading,
    Bare,
    Full,
}

pub(crate) fn shell_layout(phase: SessionPhase, current_path: &str) -> ShellLayout {
    let on_login = normalize_path(current_path) == LOGIN_PATH;
    match phase {
        SessionPhase::Initializing => ShellLayout::Loading,
        _ if on_login => ShellLayout::Bare,
        SessionPhase::Authenticated => ShellLayout::Full,
        SessionPhase::Unauthenticated => ShellLayout::Loading,
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let location = use_location();
    install_route_guard(session, location.pathname, use_navigate());

    let layout = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|s| shell_layout(s.state().phase(), &path))
    });

    view! {
        {move || match layout.get() {
            ShellLayout::Loading => view! {
                <div class="loading-shell">
                    <div class="loading-shell__spinner"></div>
                </div>
            }
            .into_any(),
            ShellLayout::Bare => view! {
                <main class="login-layout">
                    <AppRoutes/>
                </main>
            }
            .into_any(),
            ShellLayout::Full => view! {
                <div class="app-layout">
                    <Sidebar/>
                    <div class="app-layout__main">
                        <Header/>
                        <main class="app-layout__content">
                            <AppRoutes/>
                        </main>
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("login") view=LoginPage/>
            <Route path=StaticSegment("") view=DashboardPage/>
            <Route path=StaticSegment("projects") view=SectionPage/>
            <Route path=StaticSegment("clients") view=SectionPage/>
            <Route path=StaticSegment("interns") view=SectionPage/>
            <Route path=StaticSegment("employees") view=SectionPage/>
            <Route path=StaticSegment("email-agent") view=SectionPage/>
            <Route path=StaticSegment("documents") view=SectionPage/>
        </Routes>
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
