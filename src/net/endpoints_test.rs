use super::*;

#[test]
fn seller_endpoints_use_saller_segment() {
    let e = endpoints(AccountKind::Seller);
    assert_eq!(e.register, "/saller/register");
    assert_eq!(e.request_otp, "/saller/request-otp");
    assert_eq!(e.confirm_signin, "/auth/saller/confirm-signin");
    assert_eq!(e.login, "/auth/saller/login");
}

#[test]
fn user_endpoints_use_user_segment() {
    let e = endpoints(AccountKind::User);
    assert_eq!(e.forgot_password, "/auth/user/forgot-password");
    assert_eq!(e.reset_password, "/auth/user/reset-password");
}

#[test]
fn profile_endpoint_covers_all_roles() {
    assert_eq!(profile_endpoint(Role::User), "/auth/user/profile");
    assert_eq!(profile_endpoint(Role::Seller), "/auth/saller/profile");
    assert_eq!(profile_endpoint(Role::Admin), "/auth/admin/profile");
}

#[test]
fn account_endpoint_appends_id() {
    assert_eq!(account_endpoint(AccountKind::User, "42"), "/user/42");
    assert_eq!(account_endpoint(AccountKind::Seller, "s-9"), "/saller/s-9");
}
