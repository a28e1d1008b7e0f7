//! Scripted collaborators for unit tests.
//!
//! All fakes share one event log so tests can assert cross-seam ordering
//! (e.g. "profile fetched before navigation").

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{ApiResponse, HttpRequest, Transport};
use crate::net::types::GeneratedFile;
use crate::state::auth::{AuthSink, AuthState};
use crate::util::files::FileSaver;
use crate::util::navigation::Navigator;
use crate::util::session::{MemorySessionStore, SessionStore};

pub(crate) const BASE_URL: &str = "http://api.test/api";

pub(crate) type EventLog = Arc<Mutex<Vec<String>>>;

pub(crate) fn events(log: &EventLog) -> Vec<String> {
    log.lock().expect("event log should lock").clone()
}

// =============================================================
// Transport
// =============================================================

pub(crate) struct MockTransport {
    log: EventLog,
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new(log: EventLog) -> Self {
        Self { log, responses: Mutex::new(VecDeque::new()), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn push(&self, response: Result<ApiResponse, ApiError>) {
        self.responses.lock().expect("responses should lock").push_back(response);
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(Ok(ApiResponse {
            status,
            content_type: Some("application/json".to_owned()),
            body: body.to_string().into_bytes(),
        }));
    }

    pub(crate) fn push_status(&self, status: u16) {
        self.push(Ok(ApiResponse { status, content_type: None, body: Vec::new() }));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests should lock").clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError> {
        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        self.log
            .lock()
            .expect("event log should lock")
            .push(format!("{} {path}", request.method));
        self.requests.lock().expect("requests should lock").push(request.clone());
        self.responses
            .lock()
            .expect("responses should lock")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

// =============================================================
// Navigator / saver / sink
// =============================================================

pub(crate) struct RecordingNavigator {
    log: EventLog,
}

impl RecordingNavigator {
    pub(crate) fn redirects(&self) -> Vec<String> {
        events(&self.log)
            .into_iter()
            .filter_map(|e| e.strip_prefix("redirect ").map(str::to_owned))
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.log.lock().expect("event log should lock").push(format!("redirect {path}"));
    }
}

#[derive(Default)]
pub(crate) struct RecordingSaver {
    pub(crate) saved: Mutex<Vec<GeneratedFile>>,
    pub(crate) fail: bool,
}

impl FileSaver for RecordingSaver {
    fn save(&self, file: &GeneratedFile) -> Result<(), ApiError> {
        if self.fail {
            return Err(ApiError::Browser("save blocked".to_owned()));
        }
        self.saved.lock().expect("saved should lock").push(file.clone());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) states: Mutex<Vec<AuthState>>,
}

impl RecordingSink {
    pub(crate) fn last(&self) -> Option<AuthState> {
        self.states.lock().expect("states should lock").last().cloned()
    }
}

impl AuthSink for RecordingSink {
    fn publish(&self, state: AuthState) {
        self.states.lock().expect("states should lock").push(state);
    }
}

// =============================================================
// Harness
// =============================================================

pub(crate) struct Harness {
    pub(crate) client: ApiClient,
    pub(crate) transport: Arc<MockTransport>,
    pub(crate) session: Arc<MemorySessionStore>,
    pub(crate) navigator: Arc<RecordingNavigator>,
    pub(crate) log: EventLog,
}

pub(crate) fn harness() -> Harness {
    harness_with(MemorySessionStore::default())
}

pub(crate) fn harness_with_token(token: &str) -> Harness {
    harness_with(MemorySessionStore::with_token(token))
}

fn harness_with(session: MemorySessionStore) -> Harness {
    let log: EventLog = Arc::default();
    let transport = Arc::new(MockTransport::new(log.clone()));
    let session = Arc::new(session);
    let navigator = Arc::new(RecordingNavigator { log: log.clone() });
    let client = ApiClient::new(BASE_URL, transport.clone(), session.clone(), navigator.clone());
    Harness { client, transport, session, navigator, log }
}

impl Harness {
    pub(crate) fn token(&self) -> Option<String> {
        self.session.get()
    }
}

pub(crate) fn user_json(username: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "username": username,
        "email": format!("{username}@example.com"),
        "firstName": "Test",
        "lastName": "User",
        "role": role
    })
}
