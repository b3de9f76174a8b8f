//! Left navigation rail filtered by the signed-in role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hiding links is presentation only. The CRM API authorizes every request
//! on its own; a role stored in the browser grants nothing by itself.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::AppSession;
use crate::net::types::Role;
use crate::util::auth::normalize_path;

/// One entry in the navigation rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const STAFF: &[Role] = &[Role::Admin, Role::Employee];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/", roles: &Role::ALL },
    NavItem { label: "Projects", href: "/projects", roles: &[Role::Admin, Role::Employee, Role::Intern] },
    NavItem { label: "Clients", href: "/clients", roles: STAFF },
    NavItem { label: "Interns", href: "/interns", roles: STAFF },
    NavItem { label: "Employees", href: "/employees", roles: &[Role::Admin] },
    NavItem { label: "Email Agent", href: "/email-agent", roles: STAFF },
    NavItem { label: "Documents (OCR)", href: "/documents", roles: STAFF },
];

/// Navigation entries `role` may see, in rail order.
pub fn nav_items_for(role: Role) -> Vec<NavItem> {
    NAV_ITEMS.iter().copied().filter(|item| item.visible_to(role)).collect()
}

/// Nav entry whose route is `path`, if any.
pub fn nav_item_for_path(path: &str) -> Option<NavItem> {
    let path = normalize_path(path);
    NAV_ITEMS.iter().copied().find(|item| item.href == path)
}

pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.href == normalize_path(current_path)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let location = use_location();

    let items = move || session.with(|s| nav_items_for(s.state().role()));
    let on_logout = move |_| session.update(|s| s.logout());

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"SH"</span>
                <span class="sidebar__name">"SERP Hawk"</span>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    let path = location.pathname.get();
                    items()
                        .into_iter()
                        .map(|item| {
                            let class = if is_active(&item, &path) {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            };
                            view! {
                                <a href=item.href class=class>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="sidebar__footer">
                <button class="sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
