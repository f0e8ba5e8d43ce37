//! In-process mock of the HTTP APIs the client talks to.
//!
//! Binds `127.0.0.1:0`, answers each request from a fixed table of stubs
//! keyed on method and path, and records every request it sees so tests can
//! assert on what actually went over the wire.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
pub struct Stub {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub body: Option<String>,
}

impl Stub {
    pub fn json(method: Method, path: &str, status: StatusCode, body: serde_json::Value) -> Self {
        Self::raw(method, path, status, &body.to_string())
    }

    pub fn raw(method: Method, path: &str, status: StatusCode, body: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            status,
            body: Some(body.to_string()),
        }
    }

    pub fn no_content(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            status: StatusCode::NO_CONTENT,
            body: None,
        }
    }
}

#[derive(Clone)]
struct MockState {
    stubs: Arc<Vec<Stub>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start(stubs: Vec<Stub>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            stubs: Arc::new(stubs),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock server received no request")
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    let stub = state
        .stubs
        .iter()
        .find(|stub| stub.method == method && stub.path == uri.path());

    match stub {
        Some(Stub {
            status,
            body: Some(body),
            ..
        }) => (*status, [(CONTENT_TYPE, "application/json")], body.clone()).into_response(),
        Some(Stub { status, .. }) => status.into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            r#"{"error":"Resource not found"}"#,
        )
            .into_response(),
    }
}
