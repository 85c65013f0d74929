//! Auth endpoint wrappers for buyer, seller and admin accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of the session store. Each call performs one
//! request through [`ApiClient`], maps the response into the session shape,
//! persists it, and surfaces failures as [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! Responses that claim success but lack what the session needs (a login
//! without a token, a profile update without an id) are rejected as
//! `Malformed` before anything is written.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use serde_json::Value;

use super::endpoints::{ADMIN_LOGIN, account_endpoint, endpoints, profile_endpoint};
use super::error::{ApiError, ApiErrorKind};
use super::http::{ApiClient, ReqwestTransport};
use super::types::{
    AccountKind, AuthTokens, EmailPayload, LoginPayload, OtpPayload, Profile, ProfileFields, ProfilePatch,
    RegisterPayload, ResetPasswordPayload, Role, SellerInfo, response_message,
};
use crate::config::ApiConfig;
use crate::state::session::{Session, SessionStore, SessionUpdate};

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Browser wiring: `localStorage` session and a `reqwest` transport.
    pub fn from_config(config: &ApiConfig) -> Self {
        let session = SessionStore::browser();
        let client = ApiClient::new(config, Rc::new(ReqwestTransport::default()), session.clone());
        Self::new(client, session)
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `POST /{user|saller}/register`. Replaces any stored session with the
    /// new identity fields (and seller info for sellers), without a token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn register_user(&self, payload: &RegisterPayload, kind: AccountKind) -> Result<Value, ApiError> {
        let body = self.client.post(endpoints(kind).register, payload).await?;
        let fields = ProfileFields::from_value(&body);
        self.session.clear();
        self.session.save(&SessionUpdate {
            user_id: fields.id,
            email: Some(payload.email.clone()),
            role: Some(kind.into()),
            full_name: Some(payload.full_name.clone()),
            phone: Some(payload.phone.clone()),
            seller_info: match kind {
                AccountKind::Seller => payload.seller_info(),
                AccountKind::User => None,
            },
            ..SessionUpdate::default()
        });
        log::info!("registered {} account", kind.label());
        Ok(body)
    }

    /// `POST /{user|saller}/request-otp`. Returns the server message, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn request_otp(&self, email: &str, kind: AccountKind) -> Result<Option<String>, ApiError> {
        let body = self
            .client
            .post(endpoints(kind).request_otp, &EmailPayload { email: email.to_owned() })
            .await?;
        Ok(response_message(&body))
    }

    /// Re-issue the signup code. Same endpoint as [`AuthService::request_otp`];
    /// the cooldown lives in the UI.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn resend_signup_otp(&self, email: &str, kind: AccountKind) -> Result<Option<String>, ApiError> {
        log::debug!("resending signup code for {} account", kind.label());
        self.request_otp(email, kind).await
    }

    /// `POST /auth/{user|saller}/confirm-signin`. When the server answers with
    /// a token the session becomes authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn confirm_sign_in(&self, email: &str, otp: &str, kind: AccountKind) -> Result<AuthTokens, ApiError> {
        let payload = OtpPayload { email: email.to_owned(), otp: otp.to_owned() };
        let body = self.client.post(endpoints(kind).confirm_signin, &payload).await?;
        let tokens = AuthTokens::from_value(&body);
        self.session.save(&SessionUpdate {
            token: tokens.token.clone(),
            user_id: tokens.user_id.clone(),
            email: Some(email.to_owned()),
            role: Some(kind.into()),
            ..SessionUpdate::default()
        });
        log::info!("signup confirmed for {} account", kind.label());
        Ok(tokens)
    }

    /// `POST /auth/{user|saller}/login`. Replaces any previous session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or no token is returned.
    pub async fn login_user(&self, payload: &LoginPayload, kind: AccountKind) -> Result<AuthTokens, ApiError> {
        let body = self.client.post(endpoints(kind).login, payload).await?;
        let tokens = AuthTokens::from_value(&body);
        let Some(token) = tokens.token.clone() else {
            return Err(ApiError::malformed("login response has no token"));
        };
        self.session.clear();
        self.session.save(&SessionUpdate {
            token: Some(token),
            user_id: tokens.user_id.clone(),
            email: Some(tokens.email.clone().unwrap_or_else(|| payload.email.clone())),
            role: Some(kind.into()),
            ..SessionUpdate::default()
        });
        log::info!("{} signed in", kind.label());
        Ok(tokens)
    }

    /// `POST /auth/admin/login`. The returned role must be `admin`; anything
    /// else is refused and nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails, the account is not an
    /// admin, or no token is returned.
    pub async fn login_admin(&self, payload: &LoginPayload) -> Result<AuthTokens, ApiError> {
        let body = self.client.post(ADMIN_LOGIN, payload).await?;
        let tokens = AuthTokens::from_value(&body);
        if tokens.role.as_deref().and_then(Role::parse) != Some(Role::Admin) {
            log::warn!("admin login refused for non-admin role");
            return Err(ApiError::new(ApiErrorKind::Forbidden, "Only administrators can sign in here."));
        }
        let Some(token) = tokens.token.clone() else {
            return Err(ApiError::malformed("admin login response has no token"));
        };
        self.session.clear();
        self.session.save(&SessionUpdate {
            token: Some(token),
            user_id: tokens.user_id.clone(),
            email: Some(tokens.email.clone().unwrap_or_else(|| payload.email.clone())),
            role: Some(Role::Admin),
            ..SessionUpdate::default()
        });
        log::info!("admin signed in");
        Ok(tokens)
    }

    /// `POST /auth/{user|saller}/forgot-password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn request_forgot_password_otp(
        &self,
        email: &str,
        kind: AccountKind,
    ) -> Result<Option<String>, ApiError> {
        let body = self
            .client
            .post(endpoints(kind).forgot_password, &EmailPayload { email: email.to_owned() })
            .await?;
        Ok(response_message(&body))
    }

    /// `POST /auth/{user|saller}/reset-password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn reset_password(
        &self,
        payload: &ResetPasswordPayload,
        kind: AccountKind,
    ) -> Result<Option<String>, ApiError> {
        let body = self.client.post(endpoints(kind).reset_password, payload).await?;
        log::info!("password reset for {} account", kind.label());
        Ok(response_message(&body))
    }

    /// `GET /auth/{user|saller|admin}/profile`. Server fields win over the
    /// cached ones; the merged profile is persisted and returned.
    ///
    /// # Errors
    ///
    /// Returns an `Unauthorized` [`ApiError`] when no token is stored or the
    /// server rejects it; callers must then clear the session.
    pub async fn get_profile(&self, role: Role) -> Result<Profile, ApiError> {
        let stored = self.session.read();
        if stored.token.is_none() {
            return Err(ApiError::missing_token());
        }
        let body = self.client.get(profile_endpoint(role)).await?;
        let profile = merge_profile(ProfileFields::from_value(&body), &stored, role);
        self.persist_profile(&profile);
        Ok(profile)
    }

    /// `PATCH /user/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the response has no id.
    pub async fn update_user_profile(&self, id: &str, patch: &ProfilePatch) -> Result<Profile, ApiError> {
        self.update_profile(AccountKind::User, id, patch).await
    }

    /// `PATCH /saller/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the response has no id.
    pub async fn update_seller_profile(&self, id: &str, patch: &ProfilePatch) -> Result<Profile, ApiError> {
        self.update_profile(AccountKind::Seller, id, patch).await
    }

    async fn update_profile(&self, kind: AccountKind, id: &str, patch: &ProfilePatch) -> Result<Profile, ApiError> {
        let stored = self.session.read();
        if stored.token.is_none() {
            return Err(ApiError::missing_token());
        }
        let body = self.client.patch(&account_endpoint(kind, id), patch).await?;
        let fields = ProfileFields::from_value(&body);
        if fields.id.is_none() {
            return Err(ApiError::malformed("profile update response has no id"));
        }
        let profile = merge_profile(fields, &stored, kind.into());
        self.persist_profile(&profile);
        log::info!("{} profile updated", kind.label());
        Ok(profile)
    }

    /// `DELETE /{user|saller}/{id}`. Success clears the whole session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when no token is stored or the request fails.
    pub async fn delete_user(&self, id: &str, kind: AccountKind) -> Result<(), ApiError> {
        if self.session.token().is_none() {
            return Err(ApiError::missing_token());
        }
        self.client.delete(&account_endpoint(kind, id)).await?;
        self.session.clear();
        log::info!("{} account deleted", kind.label());
        Ok(())
    }

    pub fn logout(&self) {
        self.session.clear();
        log::info!("signed out");
    }

    fn persist_profile(&self, profile: &Profile) {
        self.session.save(&SessionUpdate {
            user_id: non_empty(&profile.id),
            email: non_empty(&profile.email),
            full_name: non_empty(&profile.full_name),
            phone: non_empty(&profile.phone),
            seller_info: profile.seller_info.clone(),
            ..SessionUpdate::default()
        });
    }
}

fn merge_profile(fields: ProfileFields, stored: &Session, role: Role) -> Profile {
    let seller_info = match role {
        Role::Seller => merge_seller_info(fields.seller_info, stored.seller_info.as_ref()),
        Role::User | Role::Admin => None,
    };
    Profile {
        id: fields.id.or_else(|| stored.user_id.clone()).unwrap_or_default(),
        full_name: fields.full_name.or_else(|| stored.full_name.clone()).unwrap_or_default(),
        email: fields.email.or_else(|| stored.email.clone()).unwrap_or_default(),
        phone: fields.phone.or_else(|| stored.phone.clone()).unwrap_or_default(),
        role,
        seller_info,
    }
}

/// Field by field: a server value wins only when it is non-empty.
fn merge_seller_info(fresh: Option<SellerInfo>, cached: Option<&SellerInfo>) -> Option<SellerInfo> {
    let fresh = fresh.unwrap_or_default();
    let cached = cached.cloned().unwrap_or_default();
    let pick = |server: String, stored: String| if server.is_empty() { stored } else { server };
    let merged = SellerInfo {
        business_name: pick(fresh.business_name, cached.business_name),
        address: pick(fresh.address, cached.address),
        experience: pick(fresh.experience, cached.experience),
    };
    (!merged.is_empty()).then_some(merged)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
