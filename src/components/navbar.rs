//! Top navigation with role-aware dashboard links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::app::{AuthServiceHandle, refresh_session};
use crate::components::notices::notify;
use crate::net::types::Role;
use crate::state::notice::{NoticeKind, Notices};
use crate::state::session::Session;
use crate::util::nav::{Section, dashboard_link};

#[component]
pub fn Navbar() -> impl IntoView {
    let service = expect_context::<AuthServiceHandle>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let service = service.get_value();
        actions::auth::logout(&service);
        refresh_session(session, &service);
        notify(notices, NoticeKind::Success, "Signed out.");
        navigate("/", NavigateOptions::default());
    };

    let links = move || {
        let snapshot = session.get();
        let role = snapshot.role.filter(|_| snapshot.is_authenticated());
        let sections: &[Section] = match role {
            Some(Role::Admin) => &[Section::Dashboard],
            Some(_) => &Section::ALL,
            None => &[],
        };
        sections
            .iter()
            .map(|section| {
                let href = dashboard_link(role, Some(*section));
                let label = section.label(role.unwrap_or_default());
                view! { <a class="navbar__link" href=href>{label}</a> }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Seedling Market"</a>
            <div class="navbar__links">{links}</div>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! { <a class="navbar__button" href="/auth">"Sign in"</a> }
            >
                <span class="navbar__user">
                    {move || {
                        let s = session.get();
                        s.full_name.or(s.email).unwrap_or_default()
                    }}
                </span>
                <button class="navbar__button" type="button" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
