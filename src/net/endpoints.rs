//! Role → endpoint table.
//!
//! The API serves buyers under `/user` and sellers under `/saller` (sic);
//! every auth operation resolves its path through this one table.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use super::types::{AccountKind, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountEndpoints {
    pub register: &'static str,
    pub request_otp: &'static str,
    pub confirm_signin: &'static str,
    pub login: &'static str,
    pub forgot_password: &'static str,
    pub reset_password: &'static str,
    pub profile: &'static str,
    /// Prefix for `PATCH`/`DELETE /{prefix}/{id}`.
    pub account: &'static str,
}

const USER_ENDPOINTS: AccountEndpoints = AccountEndpoints {
    register: "/user/register",
    request_otp: "/user/request-otp",
    confirm_signin: "/auth/user/confirm-signin",
    login: "/auth/user/login",
    forgot_password: "/auth/user/forgot-password",
    reset_password: "/auth/user/reset-password",
    profile: "/auth/user/profile",
    account: "/user",
};

const SELLER_ENDPOINTS: AccountEndpoints = AccountEndpoints {
    register: "/saller/register",
    request_otp: "/saller/request-otp",
    confirm_signin: "/auth/saller/confirm-signin",
    login: "/auth/saller/login",
    forgot_password: "/auth/saller/forgot-password",
    reset_password: "/auth/saller/reset-password",
    profile: "/auth/saller/profile",
    account: "/saller",
};

pub const ADMIN_LOGIN: &str = "/auth/admin/login";
pub const ADMIN_PROFILE: &str = "/auth/admin/profile";

#[must_use]
pub fn endpoints(kind: AccountKind) -> &'static AccountEndpoints {
    match kind {
        AccountKind::User => &USER_ENDPOINTS,
        AccountKind::Seller => &SELLER_ENDPOINTS,
    }
}

#[must_use]
pub fn profile_endpoint(role: Role) -> &'static str {
    match AccountKind::try_from(role) {
        Ok(kind) => endpoints(kind).profile,
        Err(_) => ADMIN_PROFILE,
    }
}

#[must_use]
pub fn account_endpoint(kind: AccountKind, id: &str) -> String {
    format!("{}/{id}", endpoints(kind).account)
}
