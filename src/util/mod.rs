//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure routing decisions live here so they can be tested without a
//! browser: `nav` builds role-aware paths and `guard` decides whether a
//! protected route may render.

pub mod guard;
pub mod nav;
