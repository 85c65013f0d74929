//! Signup, login and password reset submissions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{SignedIn, SubmitError, validated};
use crate::forms::validation::{check_email, check_otp};
use crate::forms::{Field, FieldErrors, LoginDraft, RegistrationDraft, ResetDraft};
use crate::net::auth::AuthService;
use crate::net::types::{AccountKind, Role};

/// Registration accepted and the signup code emailed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupStarted {
    pub email: String,
    pub message: Option<String>,
}

/// Register, then request the signup code for the same email.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any request when the draft fails
/// validation, otherwise the first failing API call.
pub async fn submit_registration(
    service: &AuthService,
    draft: &RegistrationDraft,
    kind: AccountKind,
) -> Result<SignupStarted, SubmitError> {
    validated(draft.validate())?;
    let payload = draft.to_payload(kind);
    service.register_user(&payload, kind).await?;
    let message = service.request_otp(&payload.email, kind).await?;
    Ok(SignupStarted { email: payload.email, message })
}

/// Confirm the signup code. `None` means the account is confirmed but the
/// server issued no token, so the visitor must log in.
///
/// # Errors
///
/// [`SubmitError::Invalid`] for a malformed code, otherwise the API failure.
pub async fn confirm_signup(
    service: &AuthService,
    email: &str,
    otp: &str,
    kind: AccountKind,
) -> Result<Option<SignedIn>, SubmitError> {
    let mut errors = FieldErrors::default();
    errors.check(Field::Otp, check_otp(otp));
    validated(errors)?;
    let tokens = service.confirm_sign_in(email, otp.trim(), kind).await?;
    Ok(tokens.token.map(|_| SignedIn::new(kind.into())))
}

/// # Errors
///
/// [`SubmitError::Invalid`] for a malformed email, otherwise the API failure.
pub async fn resend_signup_otp(
    service: &AuthService,
    email: &str,
    kind: AccountKind,
) -> Result<Option<String>, SubmitError> {
    let mut errors = FieldErrors::default();
    errors.check(Field::Email, check_email(email));
    validated(errors)?;
    Ok(service.resend_signup_otp(email.trim(), kind).await?)
}

/// # Errors
///
/// [`SubmitError::Invalid`] without any request when the draft fails
/// validation, otherwise the API failure.
pub async fn submit_login(
    service: &AuthService,
    draft: &LoginDraft,
    kind: AccountKind,
) -> Result<SignedIn, SubmitError> {
    validated(draft.validate())?;
    service.login_user(&draft.to_payload(), kind).await?;
    Ok(SignedIn::new(kind.into()))
}

/// # Errors
///
/// [`SubmitError::Invalid`] without any request when the draft fails
/// validation, otherwise the API failure (including a non-admin account).
pub async fn submit_admin_login(service: &AuthService, draft: &LoginDraft) -> Result<SignedIn, SubmitError> {
    validated(draft.validate())?;
    service.login_admin(&draft.to_payload()).await?;
    Ok(SignedIn::new(Role::Admin))
}

/// First reset step: email the code. Returns the email the code went to.
///
/// # Errors
///
/// [`SubmitError::Invalid`] for a malformed email, otherwise the API failure.
pub async fn request_password_reset(
    service: &AuthService,
    draft: &ResetDraft,
    kind: AccountKind,
) -> Result<String, SubmitError> {
    validated(draft.validate_email())?;
    let email = draft.email.trim().to_owned();
    service.request_forgot_password_otp(&email, kind).await?;
    Ok(email)
}

/// Second reset step: code plus new password.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any request when the draft fails
/// validation, otherwise the API failure.
pub async fn submit_password_reset(
    service: &AuthService,
    draft: &ResetDraft,
    kind: AccountKind,
) -> Result<Option<String>, SubmitError> {
    validated(draft.validate())?;
    Ok(service.reset_password(&draft.to_payload(), kind).await?)
}

pub fn logout(service: &AuthService) {
    service.logout();
}
