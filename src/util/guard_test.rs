use super::*;

fn session(token: Option<&str>, role: Option<Role>) -> Session {
    Session { token: token.map(str::to_owned), role, ..Session::default() }
}

#[test]
fn missing_token_redirects_to_login_entry() {
    assert_eq!(guard(&session(None, Some(Role::Admin)), Role::Admin), GuardDecision::Redirect("/admin"));
    assert_eq!(guard(&Session::default(), Role::User), GuardDecision::Redirect("/auth"));
}

#[test]
fn matching_token_and_role_renders() {
    assert_eq!(guard(&session(Some("abc"), Some(Role::Admin)), Role::Admin), GuardDecision::Render);
}

#[test]
fn wrong_role_redirects() {
    assert_eq!(
        guard(&session(Some("abc"), Some(Role::Seller)), Role::Admin),
        GuardDecision::Redirect("/admin")
    );
    assert_eq!(guard(&session(Some("abc"), None), Role::Seller), GuardDecision::Redirect("/auth"));
}

// =============================================================
// render_guarded
// =============================================================

#[test]
fn render_guarded_never_builds_the_view_on_redirect() {
    let mut renders = 0;
    let result = render_guarded(&session(Some("abc"), Some(Role::User)), Role::Admin, || {
        renders += 1;
        "admin dashboard"
    });
    assert_eq!(result, Err("/admin"));
    assert_eq!(renders, 0);

    let result = render_guarded(&Session::default(), Role::Seller, || {
        renders += 1;
        "seller dashboard"
    });
    assert_eq!(result, Err("/auth"));
    assert_eq!(renders, 0);
}

#[test]
fn render_guarded_builds_the_view_once_when_allowed() {
    let mut renders = 0;
    let result = render_guarded(&session(Some("abc"), Some(Role::Seller)), Role::Seller, || {
        renders += 1;
        "seller dashboard"
    });
    assert_eq!(result, Ok("seller dashboard"));
    assert_eq!(renders, 1);
}
