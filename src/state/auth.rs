//! Auth page flow as a single tagged state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page renders its tabs, role selector, OTP modal and password
//! reset modal purely from one [`AuthFlow`] value. Actions report outcomes
//! as [`AuthEvent`]s and the page applies them.
//!
//! DESIGN
//! ======
//! `apply` matches every (state, event) pair explicitly. Pairs that make no
//! sense (confirming an OTP that was never sent, resetting while signed in as
//! admin) return [`InvalidTransition`] and leave the current state untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AccountKind, Role};

/// Password reset sub-step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetStep {
    /// Collecting the email the code is sent to.
    RequestOtp,
    /// Code sent; collecting code and new password.
    EnterOtp { email: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthFlow {
    /// Nothing chosen yet; rendered as the buyer login tab.
    #[default]
    Anonymous,
    Registering { kind: AccountKind },
    /// Registered; waiting for the emailed signup code.
    AwaitingOtp { email: String, kind: AccountKind },
    LoggingIn { kind: AccountKind },
    Authenticated { role: Role },
    ResettingPassword { kind: AccountKind, step: ResetStep },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Register tab selected.
    OpenRegister(AccountKind),
    /// Login tab selected.
    OpenLogin(AccountKind),
    /// Buyer/seller toggle on the current form.
    SelectKind(AccountKind),
    /// Registration accepted and the signup code was sent.
    SignupOtpSent { email: String },
    /// OTP modal dismissed without confirming.
    CancelOtp,
    /// Confirm-signin or login produced a session.
    SignedIn(Role),
    ForgotPassword,
    ResetOtpSent { email: String },
    PasswordReset,
    CancelReset,
    SignedOut,
}

impl AuthEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::OpenRegister(_) => "open-register",
            Self::OpenLogin(_) => "open-login",
            Self::SelectKind(_) => "select-kind",
            Self::SignupOtpSent { .. } => "signup-otp-sent",
            Self::CancelOtp => "cancel-otp",
            Self::SignedIn(_) => "signed-in",
            Self::ForgotPassword => "forgot-password",
            Self::ResetOtpSent { .. } => "reset-otp-sent",
            Self::PasswordReset => "password-reset",
            Self::CancelReset => "cancel-reset",
            Self::SignedOut => "signed-out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot apply {event} while {state}")]
pub struct InvalidTransition {
    pub state: &'static str,
    pub event: &'static str,
}

impl AuthFlow {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Registering { .. } => "registering",
            Self::AwaitingOtp { .. } => "awaiting-otp",
            Self::LoggingIn { .. } => "logging-in",
            Self::Authenticated { .. } => "authenticated",
            Self::ResettingPassword { .. } => "resetting-password",
        }
    }

    /// Account family the current form targets. `None` once authenticated
    /// as admin.
    #[must_use]
    pub fn kind(&self) -> Option<AccountKind> {
        match self {
            Self::Anonymous => Some(AccountKind::User),
            Self::Registering { kind }
            | Self::AwaitingOtp { kind, .. }
            | Self::LoggingIn { kind }
            | Self::ResettingPassword { kind, .. } => Some(*kind),
            Self::Authenticated { role } => AccountKind::try_from(*role).ok(),
        }
    }

    #[must_use]
    pub fn is_registering(&self) -> bool {
        matches!(self, Self::Registering { .. } | Self::AwaitingOtp { .. })
    }

    /// Email awaiting signup confirmation, when the OTP modal is open.
    #[must_use]
    pub fn pending_signup_email(&self) -> Option<&str> {
        match self {
            Self::AwaitingOtp { email, .. } => Some(email),
            _ => None,
        }
    }

    #[must_use]
    pub fn reset_step(&self) -> Option<&ResetStep> {
        match self {
            Self::ResettingPassword { step, .. } => Some(step),
            _ => None,
        }
    }

    /// Compute the next state.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when `event` has no meaning in the
    /// current state.
    pub fn apply(&self, event: AuthEvent) -> Result<Self, InvalidTransition> {
        let invalid = || InvalidTransition { state: self.name(), event: event.name() };
        let next = match (self, &event) {
            (Self::Authenticated { .. }, AuthEvent::OpenRegister(_) | AuthEvent::OpenLogin(_)) => {
                return Err(invalid());
            }
            (_, AuthEvent::OpenRegister(kind)) => Self::Registering { kind: *kind },
            (_, AuthEvent::OpenLogin(kind)) => Self::LoggingIn { kind: *kind },

            (Self::Anonymous | Self::LoggingIn { .. }, AuthEvent::SelectKind(kind)) => {
                Self::LoggingIn { kind: *kind }
            }
            (Self::Registering { .. }, AuthEvent::SelectKind(kind)) => Self::Registering { kind: *kind },
            (Self::ResettingPassword { step: ResetStep::RequestOtp, .. }, AuthEvent::SelectKind(kind)) => {
                Self::ResettingPassword { kind: *kind, step: ResetStep::RequestOtp }
            }

            (Self::Registering { kind }, AuthEvent::SignupOtpSent { email }) => {
                Self::AwaitingOtp { email: email.clone(), kind: *kind }
            }
            (Self::AwaitingOtp { kind, .. }, AuthEvent::CancelOtp) => Self::Registering { kind: *kind },

            (Self::AwaitingOtp { kind, .. } | Self::LoggingIn { kind }, AuthEvent::SignedIn(role))
                if Role::from(*kind) == *role =>
            {
                Self::Authenticated { role: *role }
            }
            (Self::Anonymous, AuthEvent::SignedIn(role)) => Self::Authenticated { role: *role },

            (Self::Anonymous, AuthEvent::ForgotPassword) => {
                Self::ResettingPassword { kind: AccountKind::User, step: ResetStep::RequestOtp }
            }
            (Self::LoggingIn { kind }, AuthEvent::ForgotPassword) => {
                Self::ResettingPassword { kind: *kind, step: ResetStep::RequestOtp }
            }
            (Self::Authenticated { role }, AuthEvent::ForgotPassword) => {
                let kind = AccountKind::try_from(*role).map_err(|_| invalid())?;
                Self::ResettingPassword { kind, step: ResetStep::RequestOtp }
            }
            (Self::ResettingPassword { kind, step: ResetStep::RequestOtp }, AuthEvent::ResetOtpSent { email }) => {
                Self::ResettingPassword { kind: *kind, step: ResetStep::EnterOtp { email: email.clone() } }
            }
            (Self::ResettingPassword { kind, step: ResetStep::EnterOtp { .. } }, AuthEvent::PasswordReset)
            | (Self::ResettingPassword { kind, .. }, AuthEvent::CancelReset) => Self::LoggingIn { kind: *kind },

            (_, AuthEvent::SignedOut) => Self::Anonymous,

            _ => return Err(invalid()),
        };
        Ok(next)
    }
}
