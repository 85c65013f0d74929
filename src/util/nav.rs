//! Role-aware route construction.
//!
//! Every function here is pure and total: the navbar calls them on every
//! render, with whatever role the session currently holds.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Role;

pub const AUTH_ROUTE: &str = "/auth";
pub const ADMIN_LOGIN_ROUTE: &str = "/admin";
pub const ADMIN_DASHBOARD_ROUTE: &str = "/admin/dashboard";
pub const USER_DASHBOARD_ROUTE: &str = "/user-dashboard";
pub const SELLER_DASHBOARD_ROUTE: &str = "/seller-dashboard";

/// Logical dashboard section. `Dashboard` is the buyer's "browse" tab and
/// the seller's "dashboard" tab; `Catalog` is "favorites" / "products".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Dashboard,
    Catalog,
    Orders,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Dashboard, Self::Catalog, Self::Orders];

    /// `?tab=` value for `role`. Admin has a single dashboard and no tabs.
    #[must_use]
    pub fn tab(self, role: Role) -> Option<&'static str> {
        let tab = match (role, self) {
            (Role::Admin, _) => return None,
            (_, Self::Profile) => "profile",
            (_, Self::Orders) => "orders",
            (Role::User, Self::Dashboard) => "browse",
            (Role::User, Self::Catalog) => "favorites",
            (Role::Seller, Self::Dashboard) => "dashboard",
            (Role::Seller, Self::Catalog) => "products",
        };
        Some(tab)
    }

    /// Inverse of [`Section::tab`]. Unknown or missing tabs fall back to
    /// `Dashboard`.
    #[must_use]
    pub fn from_tab(role: Role, tab: Option<&str>) -> Self {
        tab.and_then(|tab| Self::ALL.into_iter().find(|section| section.tab(role) == Some(tab)))
            .unwrap_or(Self::Dashboard)
    }

    #[must_use]
    pub fn label(self, role: Role) -> &'static str {
        match (role, self) {
            (_, Self::Profile) => "Profile",
            (_, Self::Orders) => "Orders",
            (Role::User, Self::Dashboard) => "Browse",
            (Role::User, Self::Catalog) => "Favorites",
            (Role::Seller | Role::Admin, Self::Dashboard) => "Dashboard",
            (Role::Seller | Role::Admin, Self::Catalog) => "Products",
        }
    }
}

/// Concrete route for `section` of `role`'s dashboard. Missing role or
/// section sends the visitor to the auth page.
#[must_use]
pub fn dashboard_link(role: Option<Role>, section: Option<Section>) -> String {
    let (Some(role), Some(section)) = (role, section) else {
        return AUTH_ROUTE.to_owned();
    };
    let base = match role {
        Role::User => USER_DASHBOARD_ROUTE,
        Role::Seller => SELLER_DASHBOARD_ROUTE,
        Role::Admin => return ADMIN_DASHBOARD_ROUTE.to_owned(),
    };
    match section.tab(role) {
        Some(tab) => format!("{base}?tab={tab}"),
        None => base.to_owned(),
    }
}

/// Where a successful sign-in lands.
#[must_use]
pub fn landing_route(role: Role) -> String {
    dashboard_link(Some(role), Some(Section::Profile))
}

/// Login page for a role's surface.
#[must_use]
pub fn login_entry(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_LOGIN_ROUTE,
        Role::User | Role::Seller => AUTH_ROUTE,
    }
}
