//! Buyer and seller sign-in / registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the [`AuthFlow`] signal for the route. The forms and modals below
//! only emit events into it; which form is shown is derived from the flow.
//! A visitor who already holds a session is sent to their dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::advance;
use crate::components::login_form::LoginForm;
use crate::components::password_reset::PasswordResetModal;
use crate::components::register_form::RegisterForm;
use crate::state::auth::{AuthEvent, AuthFlow};
use crate::state::session::Session;
use crate::util::nav::landing_route;

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let flow = RwSignal::new(AuthFlow::default());

    Effect::new(move || {
        let snapshot = session.get();
        if let Some(role) = snapshot.role.filter(|_| snapshot.is_authenticated()) {
            navigate(&landing_route(role), NavigateOptions::default());
        }
    });

    let registering = Memo::new(move |_| flow.with(AuthFlow::is_registering));
    let resetting = Memo::new(move |_| flow.with(|f| f.reset_step().is_some()));
    let kind = move || flow.with_untracked(AuthFlow::kind).unwrap_or_default();

    view! {
        <section class="auth-page">
            <div class="auth-page__tabs" role="tablist">
                <button
                    class="auth-page__tab"
                    class:auth-page__tab--active=move || !registering.get()
                    type="button"
                    on:click=move |_| advance(flow, AuthEvent::OpenLogin(kind()))
                >
                    "Sign in"
                </button>
                <button
                    class="auth-page__tab"
                    class:auth-page__tab--active=move || registering.get()
                    type="button"
                    on:click=move |_| advance(flow, AuthEvent::OpenRegister(kind()))
                >
                    "Register"
                </button>
            </div>
            <Show when=move || registering.get() fallback=move || view! { <LoginForm flow=flow/> }>
                <RegisterForm flow=flow/>
            </Show>
            <Show when=move || resetting.get()>
                <PasswordResetModal flow=flow/>
            </Show>
        </section>
    }
}
