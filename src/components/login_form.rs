//! Email and password sign-in for buyers and sellers.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::advance;
use super::fields::{PasswordField, TextField, field_error};
use super::notices::{notify, notify_error};
use super::role_selector::RoleSelector;
use crate::actions;
use crate::app::{AuthServiceHandle, refresh_session};
use crate::forms::{Field, FieldErrors, LoginDraft};
use crate::net::types::AccountKind;
use crate::state::auth::{AuthEvent, AuthFlow};
use crate::state::notice::{NoticeKind, Notices};
use crate::state::session::Session;

#[component]
pub fn LoginForm(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let service = expect_context::<AuthServiceHandle>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let kind = Signal::derive(move || flow.get().kind().unwrap_or_default());
    let on_select = Callback::new(move |selected: AccountKind| advance(flow, AuthEvent::SelectKind(selected)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = LoginDraft {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let kind = kind.get_untracked();
        let service = service.get_value();
        let navigate = navigate.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match actions::auth::submit_login(&service, &draft, kind).await {
                Ok(signed_in) => {
                    refresh_session(session, &service);
                    errors.try_set(FieldErrors::default());
                    password.try_set(String::new());
                    advance(flow, AuthEvent::SignedIn(signed_in.role));
                    notify(notices, NoticeKind::Success, "Signed in successfully.");
                    navigate(&signed_in.landing, NavigateOptions::default());
                }
                Err(err) => {
                    errors.try_set(err.field_errors().cloned().unwrap_or_default());
                    notify_error(notices, &err);
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2 class="auth-form__title">"Sign in"</h2>
            <RoleSelector kind=kind on_select=on_select/>
            <TextField
                label="Email"
                value=email
                error=field_error(errors, Field::Email)
                input_type="email"
                placeholder="you@example.com"
            />
            <PasswordField label="Password" value=password error=field_error(errors, Field::Password)/>
            <button
                class="link-button auth-form__forgot"
                type="button"
                on:click=move |_| advance(flow, AuthEvent::ForgotPassword)
            >
                "Forgot password?"
            </button>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
