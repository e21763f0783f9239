//! Recording mock transport shared by the integration tests.

use async_trait::async_trait;
use gw2_core::{ApiError, HttpResponse, HttpTransport};
use std::sync::Mutex;

struct Stub {
    path: String,
    required_query: Vec<(String, String)>,
    status: u16,
    body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
}

/// In-memory transport: answers from a stub table and records every
/// request so tests can assert on outbound traffic.
#[derive(Default)]
pub struct MockTransport {
    stubs: Vec<Stub>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stubs a 200 response for any request whose URL ends with `path`.
    pub fn stub(self, path: &str, body: &str) -> Self {
        self.stub_response(path, &[], 200, body)
    }

    /// Stubs a 200 response matched on `path` plus a required subset of
    /// query parameters.
    pub fn stub_with_query(self, path: &str, query: &[(&str, &str)], body: &str) -> Self {
        self.stub_response(path, query, 200, body)
    }

    pub fn stub_response(
        mut self,
        path: &str,
        query: &[(&str, &str)],
        status: u16,
        body: &str,
    ) -> Self {
        self.stubs.push(Stub {
            path: path.to_string(),
            required_query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            status,
            body: body.as_bytes().to_vec(),
        });
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query.to_vec(),
            bearer: bearer.map(ToString::to_string),
        });

        for stub in &self.stubs {
            if !url.ends_with(&stub.path) {
                continue;
            }
            if stub.required_query.iter().all(|pair| query.contains(pair)) {
                return Ok(HttpResponse {
                    status: stub.status,
                    body: stub.body.clone(),
                });
            }
        }

        Ok(HttpResponse {
            status: 404,
            body: br#"{"text":"no such id"}"#.to_vec(),
        })
    }
}
