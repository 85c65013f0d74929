//! Role-gated wrapper for dashboard routes.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::guard::render_guarded;

/// Renders `children` only while the session holds a token for `required`.
/// The decision is recomputed whenever the session snapshot changes; on
/// redirect the children are never built.
#[component]
pub fn ProtectedRoute(required: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || match render_guarded(&session.get(), required, || children().into_any()) {
        Ok(view) => view,
        Err(path) => {
            log::info!("guarded route requires {}; redirecting to {path}", required.as_str());
            view! { <Redirect path=path/> }.into_any()
        }
    }
}
