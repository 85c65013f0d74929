//! Two-step password reset modal.
//!
//! DESIGN
//! ======
//! The step lives in the shared [`AuthFlow`]: `RequestOtp` collects the
//! email, `EnterOtp` collects the code and the new password. Field values
//! are owned here so switching steps keeps what the visitor typed.

use leptos::prelude::*;

use super::advance;
use super::fields::{PasswordField, TextField, field_error};
use super::notices::{notify, notify_error};
use super::otp_input::{OtpInput, ResendButton, start_cooldown};
use crate::actions;
use crate::app::AuthServiceHandle;
use crate::forms::otp::OtpCells;
use crate::forms::{Field, FieldErrors, ResetDraft};
use crate::state::auth::{AuthEvent, AuthFlow, ResetStep};
use crate::state::cooldown::ResendCooldown;
use crate::state::notice::{NoticeKind, Notices};

#[component]
pub fn PasswordResetModal(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let service = expect_context::<AuthServiceHandle>();
    let notices = expect_context::<RwSignal<Notices>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let cells = RwSignal::new(OtpCells::default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let cooldown = RwSignal::new(ResendCooldown::default());

    let draft = move || ResetDraft {
        email: email.get_untracked(),
        otp: cells.get_untracked().value(),
        password: password.get_untracked(),
        confirm_password: confirm_password.get_untracked(),
    };
    let kind = move || flow.get_untracked().kind().unwrap_or_default();

    // Shared by the first step and the resend button.
    let send_code = move || {
        if busy.get_untracked() {
            return;
        }
        let draft = draft();
        let kind = kind();
        let service = service.get_value();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match actions::auth::request_password_reset(&service, &draft, kind).await {
                Ok(sent_to) => {
                    errors.try_set(FieldErrors::default());
                    cells.try_set(OtpCells::default());
                    if matches!(flow.get_untracked().reset_step(), Some(ResetStep::RequestOtp)) {
                        advance(flow, AuthEvent::ResetOtpSent { email: sent_to });
                    }
                    start_cooldown(cooldown);
                    notify(notices, NoticeKind::Success, "A reset code was sent to your email.");
                }
                Err(err) => {
                    errors.try_set(err.field_errors().cloned().unwrap_or_default());
                    notify_error(notices, &err);
                }
            }
            busy.try_set(false);
        });
    };

    let on_reset = move |_| {
        if busy.get_untracked() {
            return;
        }
        let draft = draft();
        let kind = kind();
        let service = service.get_value();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match actions::auth::submit_password_reset(&service, &draft, kind).await {
                Ok(message) => {
                    password.try_set(String::new());
                    confirm_password.try_set(String::new());
                    cells.try_set(OtpCells::default());
                    cooldown.try_update(ResendCooldown::reset);
                    advance(flow, AuthEvent::PasswordReset);
                    let message = message.unwrap_or_else(|| "Password updated. Please sign in.".to_owned());
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

    let on_resend = Callback::new(move |()| send_code());
    let on_cancel = move |_| {
        errors.set(FieldErrors::default());
        advance(flow, AuthEvent::CancelReset);
    };

    let body = move || match flow.get().reset_step() {
        Some(ResetStep::RequestOtp) => view! {
            <p class="dialog__hint">"Enter the email of your account and we will send a reset code."</p>
            <TextField
                label="Email"
                value=email
                error=field_error(errors, Field::Email)
                input_type="email"
                placeholder="you@example.com"
            />
            <div class="dialog__actions">
                <button class="btn" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || busy.get()
                    on:click=move |_| send_code()
                >
                    {move || if busy.get() { "Sending..." } else { "Send code" }}
                </button>
            </div>
        }
        .into_any(),
        Some(ResetStep::EnterOtp { email }) => view! {
            <p class="dialog__hint">{format!("Enter the code sent to {email}")}</p>
            <OtpInput cells=cells/>
            <Show when=move || errors.get().has(Field::Otp)>
                <p class="field__error">{move || errors.get().get(Field::Otp).to_owned()}</p>
            </Show>
            <PasswordField label="New password" value=password error=field_error(errors, Field::Password)/>
            <PasswordField
                label="Confirm password"
                value=confirm_password
                error=field_error(errors, Field::ConfirmPassword)
            />
            <div class="dialog__actions">
                <ResendButton cooldown=cooldown busy=busy on_resend=on_resend/>
                <button class="btn" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="button" disabled=move || busy.get() on:click=on_reset>
                    {move || if busy.get() { "Saving..." } else { "Reset password" }}
                </button>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--reset" role="dialog">
                <h3>"Reset password"</h3>
                {body}
            </div>
        </div>
    }
}
