//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::notices::NoticeStack;
use crate::config::ApiConfig;
use crate::net::auth::AuthService;
use crate::pages::{
    admin_login::AdminLoginPage,
    auth::AuthPage,
    dashboard::{AdminDashboardPage, SellerDashboardPage, UserDashboardPage},
    home::HomePage,
    profile::ProfileRedirect,
};
use crate::state::notice::Notices;
use crate::state::session::Session;

/// Context handle for the auth service. The service holds `Rc`s, so it is
/// kept in local storage; handlers call `get_value()` to clone it out.
pub type AuthServiceHandle = StoredValue<AuthService, LocalStorage>;

/// Re-read the persisted session into the shared snapshot signal. Call after
/// every service operation that writes or clears the session.
pub fn refresh_session(session: RwSignal<Session>, service: &AuthService) {
    session.try_set(service.session().read());
}

/// Root application component.
///
/// Provides the auth service, the session snapshot and the toast queue, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let service = AuthService::from_config(&ApiConfig::from_build_env());
    let session = RwSignal::new(service.session().read());
    let notices = RwSignal::new(Notices::default());

    provide_context::<AuthServiceHandle>(StoredValue::new_local(service));
    provide_context(session);
    provide_context(notices);

    view! {
        <Title text="Seedling Market"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("admin") view=AdminLoginPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                    <Route path=StaticSegment("user-dashboard") view=UserDashboardPage/>
                    <Route path=StaticSegment("seller-dashboard") view=SellerDashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfileRedirect/>
                </Routes>
            </main>
            <NoticeStack/>
        </Router>
    }
}
