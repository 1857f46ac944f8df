//! Recording transport used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::endpoint::Credentials;
use super::{ApiError, Endpoint, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockMethod {
    Get,
    Post,
}

/// One request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: MockMethod,
    pub endpoint: Endpoint,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned responses keyed by method, endpoint and path.
///
/// Unregistered requests answer with HTTP 404.
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<(MockMethod, Endpoint, String), Value>,
    calls: Mutex<Vec<RecordedCall>>,
    pub credentials: Credentials,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(mut self, endpoint: Endpoint, path: &str, response: Value) -> Self {
        self.responses
            .insert((MockMethod::Get, endpoint, path.to_string()), response);
        self
    }

    pub fn on_post(mut self, endpoint: Endpoint, path: &str, response: Value) -> Self {
        self.responses
            .insert((MockMethod::Post, endpoint, path.to_string()), response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn posts_to(&self, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.method == MockMethod::Post && call.path == path)
            .count()
    }

    pub fn requested(&self, path: &str) -> bool {
        self.calls().iter().any(|call| call.path == path)
    }

    fn respond(
        &self,
        method: MockMethod,
        endpoint: Endpoint,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            endpoint,
            path: path.to_string(),
            body: body.cloned(),
        });

        self.responses
            .get(&(method, endpoint, path.to_string()))
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                body: format!("no mock response for {:?} {} {}", method, endpoint, path),
            })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<Value, ApiError> {
        self.respond(MockMethod::Get, endpoint, path, None)
    }

    async fn post(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.respond(MockMethod::Post, endpoint, path, body)
    }

    fn set_credential(&mut self, endpoint: Endpoint, token: String) {
        self.credentials.set(endpoint, token);
    }
}
