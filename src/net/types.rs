//! Wire DTOs and identity types shared by the auth service and the UI.
//!
//! DESIGN
//! ======
//! Request bodies are strict `Serialize` structs with camelCase names.
//! Response bodies are read leniently from `serde_json::Value`: the API has
//! shipped `token`/`access_token`, `id`/`userId` and numeric or string ids
//! across revisions, and a missing optional field must never fail a login.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marketplace role of an authenticated principal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Buyer.
    #[default]
    User,
    Seller,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored or server-supplied role name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "seller" | "saller" => Some(Self::Seller),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Self-service account families; admins are provisioned out of band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccountKind {
    #[default]
    User,
    Seller,
}

impl AccountKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "Buyer",
            Self::Seller => "Seller",
        }
    }
}

impl From<AccountKind> for Role {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::User => Self::User,
            AccountKind::Seller => Self::Seller,
        }
    }
}

impl TryFrom<Role> for AccountKind {
    type Error = Role;

    fn try_from(role: Role) -> Result<Self, Self::Error> {
        match role {
            Role::User => Ok(Self::User),
            Role::Seller => Ok(Self::Seller),
            Role::Admin => Err(role),
        }
    }
}

/// Seller-only business profile kept alongside the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfo {
    #[serde(default)]
    pub business_name: String,
    #[serde(default, alias = "addres")]
    pub address: String,
    #[serde(default)]
    pub experience: String,
}

impl SellerInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.business_name.is_empty() && self.address.is_empty() && self.experience.is_empty()
    }
}

/// Profile as displayed by the dashboards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub seller_info: Option<SellerInfo>,
}

/// Body of `POST /{user|saller}/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RegisterPayload {
    /// Seller fields as they will be cached in the session, if any were sent.
    #[must_use]
    pub fn seller_info(&self) -> Option<SellerInfo> {
        if self.business_name.is_none() && self.address.is_none() && self.experience.is_none() {
            return None;
        }
        Some(SellerInfo {
            business_name: self.business_name.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            experience: self.experience.clone().unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpPayload {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordPayload {
    pub email: String,
    pub password: String,
    pub otp: String,
}

/// Partial profile update for `PATCH /{user|saller}/{id}`. Absent fields are
/// left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl ProfilePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Credentials returned by login, confirm-signin and admin login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthTokens {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl AuthTokens {
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        Self {
            token: first_string(body, &["token", "access_token", "accessToken"]),
            user_id: first_id(body, &["id", "userId", "user_id"]),
            email: first_string(body, &["email"]),
            role: first_string(body, &["role"]),
        }
    }
}

/// Profile fields as returned by the profile and update endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub seller_info: Option<SellerInfo>,
}

impl ProfileFields {
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        let business_name = first_string(body, &["businessName"]);
        let address = first_string(body, &["address", "addres"]);
        let experience = first_string(body, &["experience"]);
        let nested = body
            .get("sellerInfo")
            .and_then(|v| serde_json::from_value::<SellerInfo>(v.clone()).ok());
        let flat = (business_name.is_some() || address.is_some() || experience.is_some()).then(|| SellerInfo {
            business_name: business_name.unwrap_or_default(),
            address: address.unwrap_or_default(),
            experience: experience.unwrap_or_default(),
        });
        Self {
            id: first_id(body, &["id", "userId", "user_id"]),
            full_name: first_string(body, &["fullName", "full_name"]),
            email: first_string(body, &["email"]),
            phone: first_string(body, &["phone"]),
            role: first_string(body, &["role"]).as_deref().and_then(Role::parse),
            seller_info: nested.filter(|s| !s.is_empty()).or(flat),
        }
    }
}

/// Human-readable `message` from a success payload, if the server sent one.
#[must_use]
pub fn response_message(body: &Value) -> Option<String> {
    first_string(body, &["message"])
}

fn first_string(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| body.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

fn first_id(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().filter_map(|key| body.get(*key)).find_map(id_from_value)
}

/// Normalize a string or numeric id into its string form.
#[must_use]
pub fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
