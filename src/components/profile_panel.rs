//! Profile tab: load, edit and delete the signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside a guarded dashboard, so a token is present when the panel
//! is built. The server may still reject it; a rejected token clears the
//! session and sends the visitor back to the login page for their role.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures stay inline under the fields. API failures become
//! error toasts and leave the form as typed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::fields::{PasswordField, TextField, field_error};
use super::notices::{notify, notify_error};
use crate::actions::{self, SubmitError};
use crate::app::{AuthServiceHandle, refresh_session};
use crate::forms::{EXPERIENCE_OPTIONS, Field, FieldErrors, ProfileDraft, REGIONS};
use crate::net::types::{Profile, Role};
use crate::state::notice::{NoticeKind, Notices};
use crate::state::session::Session;
use crate::util::nav::login_entry;

#[component]
#[allow(clippy::too_many_lines)]
pub fn ProfilePanel(role: Role) -> impl IntoView {
    let service = expect_context::<AuthServiceHandle>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let navigate = use_navigate();

    let profile = RwSignal::new(None::<Profile>);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let business_name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());

    let fill = move |loaded: Profile| {
        let draft = ProfileDraft::from_profile(&loaded);
        full_name.try_set(draft.full_name);
        email.try_set(draft.email);
        phone.try_set(draft.phone);
        password.try_set(String::new());
        business_name.try_set(draft.business_name);
        address.try_set(draft.address);
        experience.try_set(draft.experience);
        profile.try_set(Some(loaded));
    };

    // Handles the failures every profile call shares.
    let fail = {
        let navigate = navigate.clone();
        move |err: SubmitError| {
            if matches!(err, SubmitError::SessionExpired) {
                if let Some(service) = service.try_get_value() {
                    refresh_session(session, &service);
                }
                notify_error(notices, &err);
                navigate(login_entry(role), NavigateOptions::default());
                return;
            }
            errors.try_set(err.field_errors().cloned().unwrap_or_default());
            notify_error(notices, &err);
        }
    };

    {
        let service = service.get_value();
        let fail = fail.clone();
        leptos::task::spawn_local(async move {
            match actions::profile::load_profile(&service, role).await {
                Ok(loaded) => {
                    refresh_session(session, &service);
                    fill(loaded);
                }
                Err(err) => fail(err),
            }
            loading.try_set(false);
        });
    }

    let on_save = {
        let fail = fail.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(original) = profile.get_untracked() else {
                return;
            };
            if busy.get_untracked() {
                return;
            }
            let draft = ProfileDraft {
                full_name: full_name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                password: password.get_untracked(),
                business_name: business_name.get_untracked(),
                address: address.get_untracked(),
                experience: experience.get_untracked(),
            };
            let service = service.get_value();
            let fail = fail.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                match actions::profile::save_profile(&service, &original, &draft).await {
                    Ok(Some(updated)) => {
                        refresh_session(session, &service);
                        errors.try_set(FieldErrors::default());
                        fill(updated);
                        notify(notices, NoticeKind::Success, "Profile updated.");
                    }
                    Ok(None) => {
                        errors.try_set(FieldErrors::default());
                        notify(notices, NoticeKind::Success, "Nothing to update.");
                    }
                    Err(err) => fail(err),
                }
                busy.try_set(false);
            });
        }
    };

    let on_delete = StoredValue::new_local(move |_: leptos::ev::MouseEvent| {
        let Some(current) = profile.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        let service = service.get_value();
        let navigate = navigate.clone();
        let fail = fail.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match actions::profile::delete_account(&service, &current).await {
                Ok(()) => {
                    refresh_session(session, &service);
                    notify(notices, NoticeKind::Success, "Your account was deleted.");
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => fail(err),
            }
            busy.try_set(false);
            confirm_delete.try_set(false);
        });
    });

    let editable = role != Role::Admin;

    view! {
        <section class="profile">
            <Show when=move || !loading.get() fallback=|| view! { <p class="profile__loading">"Loading profile..."</p> }>
                <form class="profile__form" on:submit=on_save.clone()>
                    <TextField label="Full name" value=full_name error=field_error(errors, Field::FullName)/>
                    <TextField label="Email" value=email error=field_error(errors, Field::Email) input_type="email"/>
                    <TextField label="Phone" value=phone error=field_error(errors, Field::Phone) input_type="tel"/>
                    <Show when=move || editable>
                        <PasswordField
                            label="New password (leave blank to keep)"
                            value=password
                            error=field_error(errors, Field::Password)
                        />
                    </Show>
                    <Show when=move || role == Role::Seller>
                        <fieldset class="profile__seller">
                            <TextField label="Business name" value=business_name error=Signal::derive(String::new)/>
                            <label class="field">
                                <span class="field__label">"Region"</span>
                                <select
                                    class="field__input"
                                    prop:value=move || address.get()
                                    on:change=move |ev| address.set(event_target_value(&ev))
                                >
                                    {REGIONS
                                        .iter()
                                        .map(|region| view! { <option value=*region>{*region}</option> })
                                        .collect_view()}
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
                    <Show when=move || editable>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save changes" }}
                        </button>
                    </Show>
                </form>
                <Show when=move || editable>
                    <div class="profile__danger">
                        <Show
                            when=move || confirm_delete.get()
                            fallback=move || {
                                view! {
                                    <button class="btn btn--danger" type="button" on:click=move |_| confirm_delete.set(true)>
                                        "Delete account"
                                    </button>
                                }
                            }
                        >
                            <p>"This permanently deletes your account. Continue?"</p>
                            <button class="btn" type="button" on:click=move |_| confirm_delete.set(false)>
                                "Keep account"
                            </button>
                            <button
                                class="btn btn--danger"
                                type="button"
                                disabled=move || busy.get()
                                on:click=move |ev| on_delete.with_value(|delete| delete(ev))
                            >
                                "Delete"
                            </button>
                        </Show>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
