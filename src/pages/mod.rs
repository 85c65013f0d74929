//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin_login;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod profile;
