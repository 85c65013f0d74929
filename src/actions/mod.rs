//! Validated submit orchestration shared by the auth and profile UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components collect input into a draft and hand it to an action. The action
//! validates synchronously, and only a clean draft reaches [`AuthService`].
//! Results come back as plain values that the component turns into state
//! transitions, toasts and navigation.
//!
//! ERROR HANDLING
//! ==============
//! [`SubmitError`] separates the three outcomes the UI treats differently:
//! inline field messages, a toast with the normalized API message, and an
//! expired session that has already been cleared and must go back to login.

pub mod auth;
pub mod profile;

use crate::forms::FieldErrors;
use crate::net::auth::AuthService;
use crate::net::error::ApiError;
use crate::net::types::Role;
use crate::util::nav::landing_route;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Validation failed; nothing was sent.
    #[error("Please correct the highlighted fields.")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The token was missing or rejected; the session has been cleared.
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
}

impl SubmitError {
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Api(_) | Self::SessionExpired => None,
        }
    }
}

/// A completed sign-in and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub role: Role,
    pub landing: String,
}

impl SignedIn {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role, landing: landing_route(role) }
    }
}

fn validated(errors: FieldErrors) -> Result<(), SubmitError> {
    errors.into_result().map_err(SubmitError::Invalid)
}

/// Clear the session when `err` means the token is no longer usable.
fn expire_on_unauthorized(service: &AuthService, err: ApiError) -> SubmitError {
    if err.is_session_invalid() {
        log::warn!("session rejected: {err}");
        service.logout();
        SubmitError::SessionExpired
    } else {
        SubmitError::Api(err)
    }
}
