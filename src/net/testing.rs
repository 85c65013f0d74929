//! Scripted transport for service tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::auth::AuthService;
use super::error::TransportError;
use super::http::{ApiClient, HttpRequest, HttpResponse, HttpTransport};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;

pub(crate) const TEST_BASE_URL: &str = "http://api.test";

/// Records every request and replays queued responses in order. An empty
/// queue answers `200` with no body.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl RecordingTransport {
    pub(crate) fn respond(&self, status: u16, body: Value) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: Some(body) }));
    }

    pub(crate) fn respond_empty(&self, status: u16) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse { status, body: None }));
    }

    pub(crate) fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(HttpResponse { status: 200, body: None }))
    }
}

pub(crate) struct Harness {
    pub(crate) transport: Rc<RecordingTransport>,
    pub(crate) session: SessionStore,
    pub(crate) service: AuthService,
}

pub(crate) fn harness() -> Harness {
    let transport = Rc::new(RecordingTransport::default());
    let session = SessionStore::in_memory();
    let config = ApiConfig { base_url: TEST_BASE_URL.to_owned() };
    let client = ApiClient::new(&config, transport.clone(), session.clone());
    let service = AuthService::new(client, session.clone());
    Harness { transport, session, service }
}
