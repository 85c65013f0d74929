//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the single bearer-token client, `auth` wraps every auth
//! endpoint, `endpoints` maps account kinds to paths, `error` normalizes
//! failures, and `types` defines the wire schema.

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
