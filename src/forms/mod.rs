//! Form drafts and per-field validation errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components bind inputs to a draft; actions call `validate` on the draft
//! and only build a wire payload when the returned [`FieldErrors`] is empty.
//! Nothing in this module performs I/O.
//!
//! DESIGN
//! ======
//! Errors are recomputed from scratch on every pass, never merged, so a fixed
//! field always clears its message.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod otp;
pub mod validation;

use std::collections::BTreeMap;

use crate::net::types::{AccountKind, LoginPayload, Profile, ProfilePatch, RegisterPayload, ResetPasswordPayload};
use validation::{
    check_confirmation, check_email, check_full_name, check_login_password, check_otp, check_phone,
    check_strong_password,
};

/// Prefix every Uzbek mobile number starts with.
pub const PHONE_PREFIX: &str = "+998";

/// Seller region choices.
pub const REGIONS: [&str; 13] = [
    "Andijon",
    "Buxoro",
    "Farg`ona",
    "Jizzax",
    "Xorazm",
    "Namangan",
    "Navoiy",
    "Qashqadaryo",
    "Samarqand",
    "Sirdaryo",
    "Surxondaryo",
    "Toshkent viloyati",
    "Toshkent shahri",
];

/// Seller experience brackets as `(wire value, label)`.
pub const EXPERIENCE_OPTIONS: [(&str, &str); 5] = [
    ("1", "Up to 1 year"),
    ("1-3", "1-3 years"),
    ("3-5", "3-5 years"),
    ("5-10", "5-10 years"),
    ("10+", "10+ years"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Otp,
}

/// Field → message for one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// Record `result` for `field`; `Ok` leaves the field valid.
    pub fn check(&mut self, field: Field, result: Result<(), String>) {
        if let Err(message) = result {
            self.entries.insert(field, message);
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Message for `field`; empty when valid.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.entries.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when every field passed.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Signup form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub business_name: String,
    pub address: String,
    pub experience: String,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: PHONE_PREFIX.to_owned(),
            password: String::new(),
            confirm_password: String::new(),
            business_name: String::new(),
            address: String::new(),
            experience: String::new(),
        }
    }
}

impl RegistrationDraft {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(Field::FullName, check_full_name(&self.full_name));
        errors.check(Field::Email, check_email(&self.email));
        errors.check(Field::Phone, check_phone(&self.phone));
        errors.check(Field::Password, check_strong_password(&self.password));
        errors.check(Field::ConfirmPassword, check_confirmation(&self.password, &self.confirm_password));
        errors
    }

    /// Wire body; seller fields are only sent for seller accounts.
    #[must_use]
    pub fn to_payload(&self, kind: AccountKind) -> RegisterPayload {
        let seller = kind == AccountKind::Seller;
        let seller_field = |value: &str| seller.then(|| value.trim().to_owned());
        RegisterPayload {
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            password: self.password.clone(),
            business_name: seller_field(&self.business_name),
            experience: seller_field(&self.experience),
            address: seller_field(&self.address),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, check_email(&self.email));
        errors.check(Field::Password, check_login_password(&self.password));
        errors
    }

    #[must_use]
    pub fn to_payload(&self) -> LoginPayload {
        LoginPayload { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

/// Forgot-password form, both steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetDraft {
    pub email: String,
    pub otp: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetDraft {
    /// First step: only the email is needed to request a code.
    #[must_use]
    pub fn validate_email(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, check_email(&self.email));
        errors
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = self.validate_email();
        errors.check(Field::Otp, check_otp(&self.otp));
        errors.check(Field::Password, check_strong_password(&self.password));
        errors.check(Field::ConfirmPassword, check_confirmation(&self.password, &self.confirm_password));
        errors
    }

    #[must_use]
    pub fn to_payload(&self) -> ResetPasswordPayload {
        ResetPasswordPayload {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            otp: self.otp.trim().to_owned(),
        }
    }
}

/// Editable copy of a loaded profile. Blank password means "unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub business_name: String,
    pub address: String,
    pub experience: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        let seller = profile.seller_info.clone().unwrap_or_default();
        Self {
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            password: String::new(),
            business_name: seller.business_name,
            address: seller.address,
            experience: seller.experience,
        }
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(Field::FullName, check_full_name(&self.full_name));
        errors.check(Field::Email, check_email(&self.email));
        errors.check(Field::Phone, check_phone(&self.phone));
        if !self.password.is_empty() {
            errors.check(Field::Password, check_strong_password(&self.password));
        }
        errors
    }

    /// Only the fields that differ from `original`.
    #[must_use]
    pub fn to_patch(&self, original: &Profile, kind: AccountKind) -> ProfilePatch {
        let changed = |draft: &str, current: &str| {
            let draft = draft.trim();
            (draft != current).then(|| draft.to_owned())
        };
        let mut patch = ProfilePatch {
            full_name: changed(&self.full_name, &original.full_name),
            email: changed(&self.email, &original.email),
            phone: changed(&self.phone, &original.phone),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            ..ProfilePatch::default()
        };
        if kind == AccountKind::Seller {
            let seller = original.seller_info.clone().unwrap_or_default();
            patch.business_name = changed(&self.business_name, &seller.business_name);
            patch.address = changed(&self.address, &seller.address);
            patch.experience = changed(&self.experience, &seller.experience);
        }
        patch
    }
}
