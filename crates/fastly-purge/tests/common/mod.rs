#![allow(dead_code)]

use fastly_purge::{PurgeRequest, PurgeResult, Transport, TransportResponse};
use std::sync::{Arc, Mutex};

pub const VALID_PURGE_URL: &str = "http://www.example.com/test/sample.jpg";
pub const VALID_PURGE_ID: &str = "154-1434616760-1946753";
pub const VALID_PURGE_SERVICE: &str = "3h16jblNfHsGtnGcUxA32F";
pub const VALID_PURGE_API_KEY: &str = "bd16a4bbcf66be5fdeb955a19cb76a32";
pub const VALID_PURGE_KEY: &str = "test/key";

pub const HEADER_SOFT_PURGE: &str = "Fastly-Soft-Purge";
pub const HEADER_API_KEY: &str = "Fastly-Key";

pub const OK_WITH_ID: &str = r#"{"status":"ok","id":"154-1434616760-1946753"}"#;
pub const OK_WITHOUT_ID: &str = r#"{"status":"ok"}"#;
pub const STATUS_ERROR: &str = r#"{"status":"error"}"#;

/// In-memory transport that answers every request with a fixed response and
/// keeps what it was sent.
#[derive(Clone)]
pub struct RecordingTransport {
    status: u16,
    body: String,
    requests: Arc<Mutex<Vec<PurgeRequest>>>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<PurgeRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn only_request(&self) -> PurgeRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: PurgeRequest) -> PurgeResult<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(TransportResponse {
            status: self.status,
            body: self.body.as_bytes().to_vec(),
        })
    }
}
