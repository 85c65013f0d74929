//! Pre-configured JSON HTTP client for the marketplace API.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`] is the single request sender. It owns the base URL, sets the
//! JSON content type and, acting as the request interceptor, attaches the
//! stored bearer token to every outgoing request. The wire itself sits behind
//! [`HttpTransport`] so tests can record requests and script responses.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses and transport failures are converted to [`ApiError`]
//! here; callers never see status codes or raw bodies. There is no retry and
//! no timeout policy.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, TransportError};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Parsed JSON body; `None` when empty or not JSON.
    pub body: Option<Value>,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport (fetch on `wasm32`, hyper natively).
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body: parse_body(&text) })
    }
}

fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, transport: Rc<dyn HttpTransport>, session: SessionStore) -> Self {
        Self { base_url: config.base_url.clone(), transport, session }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build the outgoing request, attaching the bearer token when one is stored.
    #[must_use]
    pub fn build_request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: self.url(path), headers, body }
    }

    /// Send a request and return the JSON body (`Value::Null` when empty).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn send(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        let request = self.build_request(method, path, body);
        log::debug!("{method} {path}");
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{method} {path} failed: {e}");
                return Err(ApiError::from_transport(&e));
            }
        };
        if !response.is_success() {
            log::warn!("{method} {path} -> {}", response.status);
            return Err(ApiError::from_status(response.status, response.body.as_ref()));
        }
        Ok(response.body.unwrap_or(Value::Null))
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.send(HttpMethod::Post, path, Some(encode(body)?)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.send(HttpMethod::Patch, path, Some(encode(body)?)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(HttpMethod::Delete, path, None).await
    }
}

fn encode<T: Serialize + ?Sized>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::malformed(&format!("request encode failed: {e}")))
}
