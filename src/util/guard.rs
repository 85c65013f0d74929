//! Route guard decision.
//!
//! Stateless: the `ProtectedRoute` component calls [`render_guarded`] on every
//! render with a fresh session snapshot and never caches the answer.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::nav::login_entry;
use crate::net::types::Role;
use crate::state::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Render only when a token is present and the stored role is `required`;
/// otherwise redirect to that role's login entry.
#[must_use]
pub fn guard(session: &Session, required: Role) -> GuardDecision {
    if session.token.is_some() && session.role == Some(required) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(login_entry(required))
    }
}

/// Build the guarded view only when [`guard`] says `Render`. On redirect
/// `render` is never called and the login entry path comes back instead.
///
/// # Errors
///
/// Returns the redirect path when the session does not hold `required`.
pub fn render_guarded<T>(session: &Session, required: Role, render: impl FnOnce() -> T) -> Result<T, &'static str> {
    match guard(session, required) {
        GuardDecision::Render => Ok(render()),
        GuardDecision::Redirect(path) => Err(path),
    }
}
