//! # seedling-market
//!
//! Leptos + WASM storefront client for the tree-seedling marketplace.
//!
//! The remote REST API owns every business rule. This crate covers the
//! client half of authentication: the persisted session, the bearer-token
//! HTTP client, the per-role auth endpoints, the OTP-gated signup flow,
//! password reset, role-gated routes and role-aware navigation.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("seedling-market client starting");
    leptos::mount::mount_to_body(app::App);
}
