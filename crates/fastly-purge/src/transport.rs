//! The single I/O seam of the crate. `PurgeClient` builds a `PurgeRequest`
//! and hands it to a `Transport`; everything after the round trip is
//! validated by the client.

use crate::error::PurgeResult;
use reqwest::blocking::Client;
use reqwest::Method;
use std::fmt;
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeMethod {
    /// Fastly's non-standard `PURGE` verb, sent to the cached URL itself.
    Purge,
    Post,
}

impl PurgeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurgeMethod::Purge => "PURGE",
            PurgeMethod::Post => "POST",
        }
    }

    pub fn to_method(&self) -> Method {
        static PURGE: OnceLock<Method> = OnceLock::new();
        match self {
            PurgeMethod::Purge => PURGE
                .get_or_init(|| {
                    Method::from_bytes(b"PURGE").expect("PURGE is a valid method token")
                })
                .clone(),
            PurgeMethod::Post => Method::POST,
        }
    }
}

impl fmt::Display for PurgeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeRequest {
    pub method: PurgeMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

impl PurgeRequest {
    pub fn new(method: PurgeMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

pub trait Transport: Send + Sync {
    fn send(&self, request: PurgeRequest) -> PurgeResult<TransportResponse>;
}

/// Blocking HTTP transport backed by `reqwest`. Timeouts are whatever the
/// underlying client was built with.
///
/// Like any `reqwest::blocking::Client`, this must not be created or used
/// from inside an async runtime thread.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::from_client(Client::new())
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: PurgeRequest) -> PurgeResult<TransportResponse> {
        let mut builder = self.client.request(request.method.to_method(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(TransportResponse { status, body })
    }
}
