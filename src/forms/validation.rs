//! Field rules shared by every auth form.
//!
//! Each check returns `Err(message)` with the text shown under the input.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

/// Symbols accepted as the "special character" of a strong password.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+=-";
pub const MIN_STRONG_PASSWORD_LEN: usize = 8;
pub const MIN_LOGIN_PASSWORD_LEN: usize = 6;
pub const OTP_LEN: usize = 6;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\+998\d{9}$").ok());

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email.trim()))
}

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.as_ref().is_some_and(|re| re.is_match(phone.trim()))
}

/// At least 8 characters with an uppercase letter, a lowercase letter, a
/// digit and one of [`PASSWORD_SYMBOLS`].
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_STRONG_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

#[must_use]
pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == OTP_LEN && otp.bytes().all(|b| b.is_ascii_digit())
}

pub fn check_full_name(full_name: &str) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("Full name is required".to_owned());
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_owned());
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address".to_owned());
    }
    Ok(())
}

pub fn check_phone(phone: &str) -> Result<(), String> {
    let phone = phone.trim();
    if phone.is_empty() || phone == super::PHONE_PREFIX {
        return Err("Phone number is required".to_owned());
    }
    if !is_valid_phone(phone) {
        return Err("Phone must be +998 followed by 9 digits".to_owned());
    }
    Ok(())
}

pub fn check_strong_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_owned());
    }
    if !is_strong_password(password) {
        return Err(format!(
            "Password needs at least {MIN_STRONG_PASSWORD_LEN} characters with upper and lower case letters, \
             a digit and a symbol ({PASSWORD_SYMBOLS})"
        ));
    }
    Ok(())
}

pub fn check_login_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_owned());
    }
    if password.chars().count() < MIN_LOGIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_LOGIN_PASSWORD_LEN} characters"));
    }
    Ok(())
}

pub fn check_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password != confirmation {
        return Err("Passwords do not match".to_owned());
    }
    Ok(())
}

pub fn check_otp(otp: &str) -> Result<(), String> {
    let otp = otp.trim();
    if otp.is_empty() {
        return Err("Verification code is required".to_owned());
    }
    if !is_valid_otp(otp) {
        return Err(format!("Verification code must be {OTP_LEN} digits"));
    }
    Ok(())
}
