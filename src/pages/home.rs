//! Landing page.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::util::nav::{AUTH_ROUTE, landing_route};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let cta = move || {
        let snapshot = session.get();
        match snapshot.role.filter(|_| snapshot.is_authenticated()) {
            Some(role) => view! { <a class="btn btn--primary" href=landing_route(role)>"Go to dashboard"</a> }.into_any(),
            None => view! { <a class="btn btn--primary" href=AUTH_ROUTE>"Sign in or register"</a> }.into_any(),
        }
    };

    view! {
        <section class="home">
            <h1>"Seedling Market"</h1>
            <p class="home__lead">"Buy seedlings from growers across Uzbekistan, or open a shop and sell your own."</p>
            {cta}
        </section>
    }
}
