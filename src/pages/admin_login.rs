//! Administrator sign-in.
//!
//! Admins have no signup or reset flow here; accounts are provisioned on the
//! server. A non-admin account is refused before anything is stored.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::app::{AuthServiceHandle, refresh_session};
use crate::components::fields::{PasswordField, TextField, field_error};
use crate::components::notices::{notify, notify_error};
use crate::forms::{Field, FieldErrors, LoginDraft};
use crate::state::notice::{NoticeKind, Notices};
use crate::state::session::Session;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let service = expect_context::<AuthServiceHandle>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = LoginDraft {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let service = service.get_value();
        let navigate = navigate.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match actions::auth::submit_admin_login(&service, &draft).await {
                Ok(signed_in) => {
                    refresh_session(session, &service);
                    errors.try_set(FieldErrors::default());
                    notify(notices, NoticeKind::Success, "Signed in as administrator.");
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
        <section class="auth-page auth-page--admin">
            <form class="auth-form" on:submit=on_submit>
                <h2 class="auth-form__title">"Administrator sign in"</h2>
                <TextField
                    label="Email"
                    value=email
                    error=field_error(errors, Field::Email)
                    input_type="email"
                    placeholder="admin@example.com"
                />
                <PasswordField label="Password" value=password error=field_error(errors, Field::Password)/>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </section>
    }
}
