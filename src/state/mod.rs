//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth` flow, resend `cooldown`,
//! `notice` toasts) so components depend on small focused models. Only
//! `session` is persisted; the rest lives in `RwSignal`s provided via context.

pub mod auth;
pub mod cooldown;
pub mod notice;
pub mod session;
