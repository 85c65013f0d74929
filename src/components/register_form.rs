//! Signup form and the signup OTP modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting registers the account and requests the signup code in one
//! action; the flow then moves to `AwaitingOtp` and the modal collects the
//! six digits. Confirmation either signs the visitor in or, when the server
//! issues no token, sends them to the login tab.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::advance;
use super::fields::{PasswordField, TextField, field_error};
use super::notices::{notify, notify_error};
use super::otp_input::{OtpInput, ResendButton, start_cooldown};
use super::role_selector::RoleSelector;
use crate::actions;
use crate::app::{AuthServiceHandle, refresh_session};
use crate::forms::otp::OtpCells;
use crate::forms::{EXPERIENCE_OPTIONS, Field, FieldErrors, PHONE_PREFIX, REGIONS, RegistrationDraft};
use crate::net::types::AccountKind;
use crate::state::auth::{AuthEvent, AuthFlow};
use crate::state::cooldown::ResendCooldown;
use crate::state::notice::{NoticeKind, Notices};
use crate::state::session::Session;

#[component]
pub fn RegisterForm(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let service = expect_context::<AuthServiceHandle>();
    let notices = expect_context::<RwSignal<Notices>>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(PHONE_PREFIX.to_owned());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let business_name = RwSignal::new(String::new());
    let address = RwSignal::new(REGIONS[0].to_owned());
    let experience = RwSignal::new(EXPERIENCE_OPTIONS[0].0.to_owned());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let cooldown = RwSignal::new(ResendCooldown::default());

    let kind = Signal::derive(move || flow.get().kind().unwrap_or_default());
    let is_seller = move || kind.get() == AccountKind::Seller;
    let on_select = Callback::new(move |selected: AccountKind| advance(flow, AuthEvent::SelectKind(selected)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = RegistrationDraft {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            business_name: business_name.get_untracked(),
            address: address.get_untracked(),
            experience: experience.get_untracked(),
        };
        let kind = kind.get_untracked();
        let service = service.get_value();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match actions::auth::submit_registration(&service, &draft, kind).await {
                Ok(started) => {
                    errors.try_set(FieldErrors::default());
                    advance(flow, AuthEvent::SignupOtpSent { email: started.email });
                    start_cooldown(cooldown);
                    let message = started.message.unwrap_or_else(|| "A verification code was sent to your email.".to_owned());
                    notify(notices, NoticeKind::Success, message);
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
            <h2 class="auth-form__title">"Create an account"</h2>
            <RoleSelector kind=kind on_select=on_select/>
            <TextField label="Full name" value=full_name error=field_error(errors, Field::FullName)/>
            <TextField
                label="Email"
                value=email
                error=field_error(errors, Field::Email)
                input_type="email"
                placeholder="you@example.com"
            />
            <TextField
                label="Phone"
                value=phone
                error=field_error(errors, Field::Phone)
                input_type="tel"
                placeholder="+998901234567"
            />
            <PasswordField label="Password" value=password error=field_error(errors, Field::Password)/>
            <PasswordField
                label="Confirm password"
                value=confirm_password
                error=field_error(errors, Field::ConfirmPassword)
            />
            <Show when=is_seller>
                <fieldset class="auth-form__seller">
                    <TextField label="Business name" value=business_name error=Signal::derive(String::new)/>
                    <label class="field">
                        <span class="field__label">"Region"</span>
                        <select
                            class="field__input"
                            prop:value=move || address.get()
                            on:change=move |ev| address.set(event_target_value(&ev))
                        >
                            {REGIONS.iter().map(|region| view! { <option value=*region>{*region}</option> }).collect_view()}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Experience"</span>
                        <select
                            class="field__input"
                            prop:value=move || experience.get()
                            on:change=move |ev| experience.set(event_target_value(&ev))
                        >
                            {EXPERIENCE_OPTIONS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </fieldset>
            </Show>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Sending..." } else { "Register" }}
            </button>
        </form>
        <Show when=move || flow.get().pending_signup_email().is_some()>
            <SignupOtpModal flow=flow cooldown=cooldown/>
        </Show>
    }
}

#[component]
fn SignupOtpModal(flow: RwSignal<AuthFlow>, cooldown: RwSignal<ResendCooldown>) -> impl IntoView {
    let service = expect_context::<AuthServiceHandle>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let navigate = use_navigate();

    let cells = RwSignal::new(OtpCells::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let pending = move || {
        let current = flow.get_untracked();
        let email = current.pending_signup_email()?.to_owned();
        Some((email, current.kind().unwrap_or_default()))
    };

    let on_confirm = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some((email, kind)) = pending() else {
            return;
        };
        let otp = cells.get_untracked().value();
        let service = service.get_value();
        let navigate = navigate.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match actions::auth::confirm_signup(&service, &email, &otp, kind).await {
                Ok(Some(signed_in)) => {
                    refresh_session(session, &service);
                    advance(flow, AuthEvent::SignedIn(signed_in.role));
                    notify(notices, NoticeKind::Success, "Your account is confirmed.");
                    navigate(&signed_in.landing, NavigateOptions::default());
                }
                Ok(None) => {
                    advance(flow, AuthEvent::OpenLogin(kind));
                    notify(notices, NoticeKind::Success, "Your account is confirmed. Please sign in.");
                }
                Err(err) => {
                    error.try_set(err.field_errors().map(|e| e.get(Field::Otp).to_owned()).unwrap_or_default());
                    notify_error(notices, &err);
                }
            }
            busy.try_set(false);
        });
    };

    let on_resend = Callback::new(move |()| {
        let Some((email, kind)) = pending() else {
            return;
        };
        let service = service.get_value();
        leptos::task::spawn_local(async move {
            match actions::auth::resend_signup_otp(&service, &email, kind).await {
                Ok(message) => {
                    start_cooldown(cooldown);
                    cells.try_set(OtpCells::default());
                    notify(notices, NoticeKind::Success, message.unwrap_or_else(|| "A new code was sent.".to_owned()));
                }
                Err(err) => notify_error(notices, &err),
            }
        });
    });

    let on_cancel = move |_| {
        cells.set(OtpCells::default());
        advance(flow, AuthEvent::CancelOtp);
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--otp" role="dialog">
                <h3>"Enter the code sent to your email"</h3>
                <p class="dialog__hint">{move || flow.get().pending_signup_email().unwrap_or_default().to_owned()}</p>
                <OtpInput cells=cells/>
                <Show when=move || !error.get().is_empty()>
                    <p class="field__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <ResendButton cooldown=cooldown busy=busy on_resend=on_resend/>
                    <button class="btn" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="button"
                        disabled=move || busy.get() || !cells.get().is_complete()
                        on:click=on_confirm
                    >
                        {move || if busy.get() { "Confirming..." } else { "Confirm" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
