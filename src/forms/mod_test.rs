use super::*;
use crate::net::types::{Role, SellerInfo};

fn valid_registration() -> RegistrationDraft {
    RegistrationDraft {
        full_name: "Ali Valiyev".into(),
        email: "ali@example.com".into(),
        phone: "+998901234567".into(),
        password: "Str0ng!Pass".into(),
        confirm_password: "Str0ng!Pass".into(),
        business_name: "Green Co".into(),
        address: "Toshkent shahri".into(),
        experience: "3-5".into(),
    }
}

fn profile() -> Profile {
    Profile {
        id: "1".into(),
        full_name: "Ali Valiyev".into(),
        email: "ali@example.com".into(),
        phone: "+998901234567".into(),
        role: Role::Seller,
        seller_info: Some(SellerInfo {
            business_name: "Green Co".into(),
            address: "Buxoro".into(),
            experience: "1-3".into(),
        }),
    }
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_default_is_valid() {
    let errors = FieldErrors::default();
    assert!(errors.is_empty());
    assert_eq!(errors.get(Field::Email), "");
    assert!(errors.into_result().is_ok());
}

#[test]
fn field_errors_check_records_only_failures() {
    let mut errors = FieldErrors::default();
    errors.check(Field::Email, Ok(()));
    errors.check(Field::Phone, Err("bad".into()));
    assert!(!errors.has(Field::Email));
    assert_eq!(errors.get(Field::Phone), "bad");
    assert_eq!(errors.iter().count(), 1);
}

// =============================================================
// RegistrationDraft
// =============================================================

#[test]
fn registration_draft_starts_with_phone_prefix() {
    assert_eq!(RegistrationDraft::default().phone, "+998");
}

#[test]
fn valid_registration_has_no_errors() {
    assert!(valid_registration().validate().is_empty());
}

#[test]
fn empty_registration_flags_every_required_field() {
    let errors = RegistrationDraft::default().validate();
    for field in [Field::FullName, Field::Email, Field::Phone, Field::Password] {
        assert!(errors.has(field), "{field:?} should be flagged");
    }
    assert!(!errors.has(Field::ConfirmPassword));
}

#[test]
fn phone_without_prefix_is_flagged() {
    let draft = RegistrationDraft { phone: "901234567".into(), ..valid_registration() };
    let errors = draft.validate();
    assert!(!errors.get(Field::Phone).is_empty());
    assert_eq!(errors.iter().count(), 1);
}

#[test]
fn mismatched_confirmation_is_flagged() {
    let draft = RegistrationDraft { confirm_password: "Other!234".into(), ..valid_registration() };
    assert_eq!(draft.validate().get(Field::ConfirmPassword), "Passwords do not match");
}

#[test]
fn fixing_a_field_clears_its_message() {
    let mut draft = RegistrationDraft { email: "bad".into(), ..valid_registration() };
    assert!(draft.validate().has(Field::Email));
    draft.email = "ok@site.uz".into();
    assert!(draft.validate().is_empty());
}

#[test]
fn seller_payload_carries_business_fields() {
    let payload = valid_registration().to_payload(AccountKind::Seller);
    assert_eq!(payload.business_name.as_deref(), Some("Green Co"));
    assert_eq!(payload.address.as_deref(), Some("Toshkent shahri"));
    assert_eq!(payload.experience.as_deref(), Some("3-5"));
}

#[test]
fn buyer_payload_omits_business_fields() {
    let payload = valid_registration().to_payload(AccountKind::User);
    assert!(payload.business_name.is_none());
    assert!(payload.seller_info().is_none());
}

// =============================================================
// Login / reset
// =============================================================

#[test]
fn login_draft_checks_email_and_short_password() {
    let errors = LoginDraft { email: "x".into(), password: "123".into() }.validate();
    assert!(errors.has(Field::Email));
    assert!(errors.has(Field::Password));
    let ok = LoginDraft { email: " a@b.uz ".into(), password: "123456".into() };
    assert!(ok.validate().is_empty());
    assert_eq!(ok.to_payload().email, "a@b.uz");
}

#[test]
fn reset_first_step_only_needs_email() {
    let draft = ResetDraft { email: "a@b.uz".into(), ..ResetDraft::default() };
    assert!(draft.validate_email().is_empty());
    let errors = draft.validate();
    assert!(errors.has(Field::Otp));
    assert!(errors.has(Field::Password));
}

#[test]
fn complete_reset_is_valid() {
    let draft = ResetDraft {
        email: "a@b.uz".into(),
        otp: "123456".into(),
        password: "N3w!pass".into(),
        confirm_password: "N3w!pass".into(),
    };
    assert!(draft.validate().is_empty());
    assert_eq!(draft.to_payload().otp, "123456");
}

// =============================================================
// ProfileDraft
// =============================================================

#[test]
fn unchanged_profile_draft_yields_empty_patch() {
    let original = profile();
    let draft = ProfileDraft::from_profile(&original);
    assert!(draft.validate().is_empty());
    assert!(draft.to_patch(&original, AccountKind::Seller).is_empty());
}

#[test]
fn profile_patch_contains_only_changes() {
    let original = profile();
    let mut draft = ProfileDraft::from_profile(&original);
    draft.full_name = "Ali V.".into();
    draft.address = "Navoiy".into();
    let patch = draft.to_patch(&original, AccountKind::Seller);
    assert_eq!(patch.full_name.as_deref(), Some("Ali V."));
    assert_eq!(patch.address.as_deref(), Some("Navoiy"));
    assert!(patch.email.is_none());
    assert!(patch.password.is_none());
}

#[test]
fn buyer_patch_never_sends_seller_fields() {
    let original = profile();
    let mut draft = ProfileDraft::from_profile(&original);
    draft.business_name = "Other".into();
    assert!(draft.to_patch(&original, AccountKind::User).business_name.is_none());
}

#[test]
fn weak_new_password_is_rejected_blank_is_allowed() {
    let mut draft = ProfileDraft::from_profile(&profile());
    assert!(!draft.validate().has(Field::Password));
    draft.password = "weak".into();
    assert!(draft.validate().has(Field::Password));
}
