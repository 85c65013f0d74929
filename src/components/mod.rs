//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the auth service handle, the session snapshot and the
//! toast queue from Leptos context, hand drafts to `actions`, and turn the
//! results into flow transitions, toasts and navigation. Async continuations
//! write through `try_set`/`try_update` so a view disposed mid-request is
//! never written to.

pub mod fields;
pub mod login_form;
pub mod navbar;
pub mod notices;
pub mod otp_input;
pub mod password_reset;
pub mod profile_panel;
pub mod protected_route;
pub mod register_form;
pub mod role_selector;

use leptos::prelude::*;

use crate::state::auth::{AuthEvent, AuthFlow};

/// Apply `event` to the shared flow. Impossible transitions are logged and
/// leave the flow unchanged.
pub fn advance(flow: RwSignal<AuthFlow>, event: AuthEvent) {
    flow.try_update(|current| match current.apply(event) {
        Ok(next) => *current = next,
        Err(err) => log::warn!("auth flow: {err}"),
    });
}
