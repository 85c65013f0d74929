use super::*;
use crate::net::http::HttpMethod;
use crate::net::testing::{Harness, harness};
use crate::net::types::SellerInfo;
use serde_json::json;

fn seller_registration() -> RegisterPayload {
    RegisterPayload {
        full_name: "Ali Valiyev".into(),
        email: "ali@example.com".into(),
        phone: "+998901234567".into(),
        password: "Str0ng!Pass".into(),
        business_name: Some("Green Co".into()),
        experience: Some("3-5".into()),
        address: Some("Toshkent".into()),
    }
}

fn login(email: &str) -> LoginPayload {
    LoginPayload { email: email.into(), password: "secret1".into() }
}

// =============================================================
// register / otp / confirm
// =============================================================

#[tokio::test]
async fn register_seller_posts_body_and_caches_seller_info() {
    let h = harness();
    h.transport.respond(201, json!({"id": 42}));

    h.service.register_user(&seller_registration(), AccountKind::Seller).await.unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, "http://api.test/saller/register");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "fullName": "Ali Valiyev",
            "email": "ali@example.com",
            "phone": "+998901234567",
            "password": "Str0ng!Pass",
            "businessName": "Green Co",
            "experience": "3-5",
            "address": "Toshkent",
        }))
    );

    let session = h.session.read();
    assert_eq!(session.role, Some(Role::Seller));
    assert_eq!(session.user_id.as_deref(), Some("42"));
    assert_eq!(session.seller_info.unwrap().business_name, "Green Co");
    assert!(session.token.is_none());
}

#[tokio::test]
async fn register_drops_a_token_left_from_another_account() {
    let h = harness();
    h.session.save(&SessionUpdate { token: Some("stale-other-account".into()), ..SessionUpdate::default() });
    assert!(!h.session.read().is_authenticated());
    h.transport.respond(201, json!({"id": 42}));

    h.service.register_user(&seller_registration(), AccountKind::Seller).await.unwrap();

    let session = h.session.read();
    assert!(session.token.is_none());
    assert_eq!(session.role, Some(Role::Seller));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn register_failure_writes_nothing() {
    let h = harness();
    h.transport.respond(409, json!({"message": "Email already registered"}));

    let err = h.service.register_user(&seller_registration(), AccountKind::Seller).await.unwrap_err();

    assert_eq!(err.message, "Email already registered");
    assert_eq!(h.session.read(), Session::default());
}

#[tokio::test]
async fn request_otp_returns_server_message() {
    let h = harness();
    h.transport.respond(200, json!({"message": "Code sent"}));

    let message = h.service.request_otp("a@b.uz", AccountKind::User).await.unwrap();

    assert_eq!(message.as_deref(), Some("Code sent"));
    assert_eq!(h.transport.requests()[0].url, "http://api.test/user/request-otp");
    assert_eq!(h.transport.requests()[0].body, Some(json!({"email": "a@b.uz"})));
}

#[tokio::test]
async fn resend_uses_request_otp_endpoint() {
    let h = harness();
    h.service.resend_signup_otp("a@b.uz", AccountKind::Seller).await.unwrap();
    assert_eq!(h.transport.requests()[0].url, "http://api.test/saller/request-otp");
}

#[tokio::test]
async fn confirm_sign_in_stores_token_and_identity() {
    let h = harness();
    h.transport.respond(200, json!({"access_token": "tok", "userId": "u7"}));

    let tokens = h.service.confirm_sign_in("a@b.uz", "123456", AccountKind::User).await.unwrap();

    assert_eq!(tokens.token.as_deref(), Some("tok"));
    let request = &h.transport.requests()[0];
    assert_eq!(request.url, "http://api.test/auth/user/confirm-signin");
    assert_eq!(request.body, Some(json!({"email": "a@b.uz", "otp": "123456"})));
    let session = h.session.read();
    assert!(session.is_authenticated());
    assert_eq!(session.user_id.as_deref(), Some("u7"));
    assert_eq!(session.email.as_deref(), Some("a@b.uz"));
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_replaces_previous_session() {
    let h = harness();
    h.session.save(&SessionUpdate {
        token: Some("old".into()),
        role: Some(Role::Seller),
        full_name: Some("Previous".into()),
        ..SessionUpdate::default()
    });
    h.transport.respond(200, json!({"token": "new", "id": "9", "email": "b@c.uz"}));

    h.service.login_user(&login("b@c.uz"), AccountKind::User).await.unwrap();

    let session = h.session.read();
    assert_eq!(session.token.as_deref(), Some("new"));
    assert_eq!(session.role, Some(Role::User));
    assert!(session.full_name.is_none());
    assert_eq!(h.transport.requests()[0].url, "http://api.test/auth/user/login");
}

#[tokio::test]
async fn login_without_token_is_malformed() {
    let h = harness();
    h.transport.respond(200, json!({"message": "ok"}));

    let err = h.service.login_user(&login("b@c.uz"), AccountKind::User).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Malformed);
    assert!(h.session.token().is_none());
}

#[tokio::test]
async fn login_rejection_surfaces_nested_error_message() {
    let h = harness();
    h.transport.respond(400, json!({"error": {"message": "X"}}));

    let err = h.service.login_user(&login("b@c.uz"), AccountKind::Seller).await.unwrap_err();

    assert_eq!(err.message, "X");
}

#[tokio::test]
async fn admin_login_accepts_admin_role() {
    let h = harness();
    h.transport.respond(200, json!({"token": "adm", "role": "admin"}));

    h.service.login_admin(&login("root@site.uz")).await.unwrap();

    assert_eq!(h.transport.requests()[0].url, "http://api.test/auth/admin/login");
    let session = h.session.read();
    assert_eq!(session.role, Some(Role::Admin));
    assert_eq!(session.email.as_deref(), Some("root@site.uz"));
}

#[tokio::test]
async fn admin_login_refuses_other_roles_and_stores_nothing() {
    let h = harness();
    h.transport.respond(200, json!({"token": "t", "role": "seller"}));

    let err = h.service.login_admin(&login("x@site.uz")).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Forbidden);
    assert_eq!(h.session.read(), Session::default());
}

// =============================================================
// password reset
// =============================================================

#[tokio::test]
async fn forgot_and_reset_hit_role_endpoints() {
    let h = harness();
    h.service.request_forgot_password_otp("s@x.uz", AccountKind::Seller).await.unwrap();
    let payload = ResetPasswordPayload { email: "s@x.uz".into(), password: "N3w!pass".into(), otp: "654321".into() };
    h.service.reset_password(&payload, AccountKind::Seller).await.unwrap();

    let urls: Vec<String> = h.transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec!["http://api.test/auth/saller/forgot-password", "http://api.test/auth/saller/reset-password"]
    );
    assert_eq!(h.session.read(), Session::default());
}

// =============================================================
// profile
// =============================================================

#[tokio::test]
async fn get_profile_without_token_makes_no_request() {
    let h = harness();
    let err = h.service.get_profile(Role::User).await.unwrap_err();
    assert!(err.is_session_invalid());
    assert_eq!(h.transport.request_count(), 0);
}

#[tokio::test]
async fn get_profile_merges_server_over_stored_fields() {
    let h = harness();
    h.session.save(&SessionUpdate {
        token: Some("t".into()),
        role: Some(Role::Seller),
        full_name: Some("Stored Name".into()),
        phone: Some("+998900000000".into()),
        seller_info: Some(SellerInfo { business_name: "Old".into(), ..SellerInfo::default() }),
        ..SessionUpdate::default()
    });
    h.transport.respond(200, json!({"id": "5", "fullName": "Server Name", "businessName": "Green Co"}));

    let profile = h.service.get_profile(Role::Seller).await.unwrap();

    assert_eq!(h.transport.requests()[0].url, "http://api.test/auth/saller/profile");
    assert_eq!(h.transport.requests()[0].header("authorization"), Some("Bearer t"));
    assert_eq!(profile.full_name, "Server Name");
    assert_eq!(profile.phone, "+998900000000");
    assert_eq!(profile.seller_info.as_ref().unwrap().business_name, "Green Co");
    let session = h.session.read();
    assert_eq!(session.full_name.as_deref(), Some("Server Name"));
    assert_eq!(session.user_id.as_deref(), Some("5"));
}

fn seed_seller_session(h: &Harness) {
    h.session.save(&SessionUpdate {
        token: Some("t".into()),
        role: Some(Role::Seller),
        seller_info: Some(SellerInfo {
            business_name: "Old".into(),
            address: "Toshkent".into(),
            experience: "3-5".into(),
        }),
        ..SessionUpdate::default()
    });
}

#[tokio::test]
async fn get_profile_keeps_stored_seller_fields_the_server_omits() {
    let h = harness();
    seed_seller_session(&h);
    h.transport.respond(200, json!({"id": "5", "businessName": "Green Co", "experience": ""}));

    let profile = h.service.get_profile(Role::Seller).await.unwrap();

    let expected = SellerInfo {
        business_name: "Green Co".into(),
        address: "Toshkent".into(),
        experience: "3-5".into(),
    };
    assert_eq!(profile.seller_info.as_ref(), Some(&expected));
    assert_eq!(h.session.read().seller_info, Some(expected));
}

#[tokio::test]
async fn update_seller_profile_keeps_stored_seller_fields_the_server_omits() {
    let h = harness();
    seed_seller_session(&h);
    h.transport.respond(200, json!({"id": "8", "address": "Samarqand"}));
    let patch = ProfilePatch { address: Some("Samarqand".into()), ..ProfilePatch::default() };

    let profile = h.service.update_seller_profile("8", &patch).await.unwrap();

    let info = profile.seller_info.unwrap();
    assert_eq!(info.business_name, "Old");
    assert_eq!(info.address, "Samarqand");
    assert_eq!(info.experience, "3-5");
    assert_eq!(h.session.read().seller_info.unwrap().business_name, "Old");
}

#[tokio::test]
async fn get_profile_unauthorized_is_session_invalid() {
    let h = harness();
    h.session.save(&SessionUpdate { token: Some("stale".into()), role: Some(Role::User), ..SessionUpdate::default() });
    h.transport.respond(401, json!({"message": "jwt expired"}));

    let err = h.service.get_profile(Role::User).await.unwrap_err();

    assert!(err.is_session_invalid());
    assert_eq!(err.message, "jwt expired");
}

#[tokio::test]
async fn admin_profile_uses_admin_endpoint() {
    let h = harness();
    h.session.save(&SessionUpdate { token: Some("a".into()), role: Some(Role::Admin), ..SessionUpdate::default() });
    h.transport.respond(200, json!({"id": 1, "email": "root@site.uz"}));

    let profile = h.service.get_profile(Role::Admin).await.unwrap();

    assert_eq!(h.transport.requests()[0].url, "http://api.test/auth/admin/profile");
    assert_eq!(profile.id, "1");
    assert!(profile.seller_info.is_none());
}

#[tokio::test]
async fn update_user_profile_persists_returned_profile() {
    let h = harness();
    h.session.save(&SessionUpdate { token: Some("t".into()), role: Some(Role::User), ..SessionUpdate::default() });
    h.transport.respond(200, json!({"id": "3", "fullName": "New Name", "email": "n@x.uz"}));
    let patch = ProfilePatch { full_name: Some("New Name".into()), ..ProfilePatch::default() };

    let profile = h.service.update_user_profile("3", &patch).await.unwrap();

    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Patch);
    assert_eq!(request.url, "http://api.test/user/3");
    assert_eq!(request.body, Some(json!({"fullName": "New Name"})));
    assert_eq!(profile.full_name, "New Name");
    assert_eq!(h.session.read().email.as_deref(), Some("n@x.uz"));
}

#[tokio::test]
async fn update_response_without_id_is_rejected_and_not_persisted() {
    let h = harness();
    h.session.save(&SessionUpdate {
        token: Some("t".into()),
        role: Some(Role::Seller),
        full_name: Some("Kept".into()),
        ..SessionUpdate::default()
    });
    h.transport.respond(200, json!({"fullName": "Lost"}));
    let patch = ProfilePatch { full_name: Some("Lost".into()), ..ProfilePatch::default() };

    let err = h.service.update_seller_profile("8", &patch).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Malformed);
    assert_eq!(h.transport.requests()[0].url, "http://api.test/saller/8");
    assert_eq!(h.session.read().full_name.as_deref(), Some("Kept"));
}

// =============================================================
// delete / logout
// =============================================================

#[tokio::test]
async fn delete_user_clears_every_session_field() {
    let h = harness();
    h.session.save(&SessionUpdate {
        token: Some("t".into()),
        user_id: Some("1".into()),
        email: Some("a@b.uz".into()),
        role: Some(Role::User),
        full_name: Some("Ali".into()),
        phone: Some("+998901234567".into()),
        seller_info: None,
    });
    h.transport.respond_empty(204);

    h.service.delete_user("1", AccountKind::User).await.unwrap();

    let request = &h.transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.url, "http://api.test/user/1");
    assert_eq!(h.session.read(), Session::default());
}

#[tokio::test]
async fn delete_failure_keeps_session() {
    let h = harness();
    h.session.save(&SessionUpdate { token: Some("t".into()), role: Some(Role::User), ..SessionUpdate::default() });
    h.transport.respond(500, json!({}));

    assert!(h.service.delete_user("1", AccountKind::User).await.is_err());
    assert_eq!(h.session.token().as_deref(), Some("t"));
}

#[test]
fn logout_clears_session() {
    let h = harness();
    h.session.save(&SessionUpdate { token: Some("t".into()), role: Some(Role::User), ..SessionUpdate::default() });
    h.service.logout();
    assert!(!h.session.read().is_authenticated());
}
