//! Uniform API error type and message extraction.
//!
//! ERROR HANDLING
//! ==============
//! Every failure that crosses the HTTP boundary is turned into one
//! [`ApiError`] carrying a kind and a single display string, so components
//! only ever show `err.message` and branch on `err.kind`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure to get any HTTP response at all (DNS, TLS, CORS, offline, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response.
    Network,
    /// Missing or rejected credentials (HTTP 401, or no stored token).
    Unauthorized,
    /// Any other non-2xx response.
    Rejected { status: u16 },
    /// A 2xx response whose body cannot be trusted.
    Malformed,
    /// Authenticated, but not allowed into this surface.
    Forbidden,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Build the error for a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let kind = if status == 401 { ApiErrorKind::Unauthorized } else { ApiErrorKind::Rejected { status } };
        Self::new(kind, extract_message(body, None))
    }

    #[must_use]
    pub fn from_transport(err: &TransportError) -> Self {
        Self::new(ApiErrorKind::Network, extract_message(None, Some(&err.0)))
    }

    #[must_use]
    pub fn missing_token() -> Self {
        Self::new(ApiErrorKind::Unauthorized, "Authorization token not found. Please sign in again.")
    }

    #[must_use]
    pub fn malformed(what: &str) -> Self {
        Self::new(ApiErrorKind::Malformed, format!("Unexpected server response: {what}"))
    }

    /// A stale or missing token cannot recover on its own; the caller must
    /// clear the session and send the user back to login.
    #[must_use]
    pub fn is_session_invalid(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

/// Resolve the one message shown to the user.
///
/// Lookup order: `body.error.message`, then `body.message`, then the
/// transport failure text, then [`GENERIC_ERROR_MESSAGE`].
#[must_use]
pub fn extract_message(body: Option<&Value>, transport_message: Option<&str>) -> String {
    let nested = body
        .and_then(|b| b.get("error"))
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str);
    let top = body.and_then(|b| b.get("message")).and_then(Value::as_str);

    [nested, top, transport_message]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map_or_else(|| GENERIC_ERROR_MESSAGE.to_owned(), str::to_owned)
}
