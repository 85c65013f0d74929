//! Role dashboards behind the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buyer and seller dashboards pick their section from the `?tab=` query;
//! the admin dashboard is a single screen. Only the profile section is
//! functional here. Catalog, order and moderation screens render a
//! placeholder until those APIs are wired in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::profile_panel::ProfilePanel;
use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Role;
use crate::util::nav::{Section, dashboard_link};

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute required=Role::User>
            <DashboardView role=Role::User/>
        </ProtectedRoute>
    }
}

#[component]
pub fn SellerDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute required=Role::Seller>
            <DashboardView role=Role::Seller/>
        </ProtectedRoute>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute required=Role::Admin>
            <section class="dashboard">
                <h1 class="dashboard__title">{dashboard_title(Role::Admin)}</h1>
                <p class="dashboard__placeholder">{placeholder_text(Role::Admin, Section::Dashboard)}</p>
                <ProfilePanel role=Role::Admin/>
            </section>
        </ProtectedRoute>
    }
}

#[component]
fn DashboardView(role: Role) -> impl IntoView {
    let query = use_query_map();
    let section = Memo::new(move |_| query.with(|q| Section::from_tab(role, q.get("tab").as_deref())));

    let tabs = Section::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <a
                    class="dashboard__tab"
                    class:dashboard__tab--active=move || section.get() == tab
                    href=dashboard_link(Some(role), Some(tab))
                >
                    {tab.label(role)}
                </a>
            }
        })
        .collect_view();

    let body = move || match section.get() {
        Section::Profile => view! { <ProfilePanel role=role/> }.into_any(),
        other => view! { <p class="dashboard__placeholder">{placeholder_text(role, other)}</p> }.into_any(),
    };

    view! {
        <section class="dashboard">
            <h1 class="dashboard__title">{dashboard_title(role)}</h1>
            <nav class="dashboard__tabs">{tabs}</nav>
            {body}
        </section>
    }
}

fn dashboard_title(role: Role) -> &'static str {
    match role {
        Role::User => "My account",
        Role::Seller => "Seller dashboard",
        Role::Admin => "Administration",
    }
}

fn placeholder_text(role: Role, section: Section) -> &'static str {
    match (role, section) {
        (_, Section::Profile) => "",
        (Role::Admin, _) => "User, seller and product moderation is not available yet.",
        (_, Section::Orders) => "Your orders will appear here.",
        (Role::User, Section::Dashboard) => "Browse seedlings from growers near you.",
        (Role::User, Section::Catalog) => "Seedlings you save will appear here.",
        (Role::Seller, Section::Dashboard) => "Sales overview for your shop.",
        (Role::Seller, Section::Catalog) => "Your product listings will appear here.",
    }
}
