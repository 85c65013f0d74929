//! `/profile` shortcut into the signed-in role's profile tab.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::nav::{AUTH_ROUTE, landing_route};

#[component]
pub fn ProfileRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || {
        let snapshot = session.get_untracked();
        let path = match snapshot.role.filter(|_| snapshot.is_authenticated()) {
            Some(role) => landing_route(role),
            None => AUTH_ROUTE.to_owned(),
        };
        view! { <Redirect path=path/> }
    }
}
