//! Profile load, edit and account deletion.
//!
//! All three need a live token; an `Unauthorized` answer clears the session
//! and surfaces as [`SubmitError::SessionExpired`].

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::{SubmitError, expire_on_unauthorized, validated};
use crate::forms::ProfileDraft;
use crate::net::auth::AuthService;
use crate::net::error::{ApiError, ApiErrorKind};
use crate::net::types::{AccountKind, Profile, Role};

/// # Errors
///
/// [`SubmitError::SessionExpired`] when the token is missing or rejected,
/// otherwise the API failure.
pub async fn load_profile(service: &AuthService, role: Role) -> Result<Profile, SubmitError> {
    service
        .get_profile(role)
        .await
        .map_err(|err| expire_on_unauthorized(service, err))
}

/// Send the fields of `draft` that differ from `original`. `Ok(None)` means
/// there was nothing to change and no request was made.
///
/// # Errors
///
/// [`SubmitError::Invalid`] without any request when the draft fails
/// validation, [`SubmitError::SessionExpired`] on a rejected token, otherwise
/// the API failure.
pub async fn save_profile(
    service: &AuthService,
    original: &Profile,
    draft: &ProfileDraft,
) -> Result<Option<Profile>, SubmitError> {
    let kind = self_service_kind(original.role)?;
    validated(draft.validate())?;
    let patch = draft.to_patch(original, kind);
    if patch.is_empty() {
        return Ok(None);
    }
    let id = account_id(original)?;
    let result = match kind {
        AccountKind::User => service.update_user_profile(id, &patch).await,
        AccountKind::Seller => service.update_seller_profile(id, &patch).await,
    };
    result.map(Some).map_err(|err| expire_on_unauthorized(service, err))
}

/// # Errors
///
/// [`SubmitError::SessionExpired`] when the token is missing or rejected,
/// otherwise the API failure. The session is kept on failure.
pub async fn delete_account(service: &AuthService, profile: &Profile) -> Result<(), SubmitError> {
    let kind = self_service_kind(profile.role)?;
    let id = account_id(profile)?;
    service
        .delete_user(id, kind)
        .await
        .map_err(|err| expire_on_unauthorized(service, err))
}

fn self_service_kind(role: Role) -> Result<AccountKind, SubmitError> {
    AccountKind::try_from(role).map_err(|_| {
        SubmitError::Api(ApiError::new(
            ApiErrorKind::Forbidden,
            "Administrator accounts cannot be changed here.",
        ))
    })
}

fn account_id(profile: &Profile) -> Result<&str, SubmitError> {
    if profile.id.is_empty() {
        return Err(SubmitError::Api(ApiError::malformed("account id is missing")));
    }
    Ok(&profile.id)
}
