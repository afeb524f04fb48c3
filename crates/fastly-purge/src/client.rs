use crate::config::PurgeConfig;
use crate::error::{PurgeError, PurgeResult};
use crate::mode::{IntoPurgeMode, PurgeMode};
use crate::response::PurgeResponse;
use crate::transport::{HttpTransport, PurgeMethod, PurgeRequest, Transport};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.fastly.com";

pub const HEADER_SOFT_PURGE: &str = "Fastly-Soft-Purge";
pub const HEADER_API_KEY: &str = "Fastly-Key";

/// Issues purge requests against the Fastly API.
///
/// The client is immutable once built. Every operation performs at most one
/// round trip through its `Transport`, and all argument checks happen before
/// that round trip. Nothing is retried.
#[derive(Clone)]
pub struct PurgeClient {
    api_key: Option<String>,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl PurgeClient {
    /// Unauthenticated client: only `purge_url` is usable.
    pub fn new() -> Self {
        Self::from_transport(HttpTransport::new())
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new().api_key(api_key)
    }

    pub fn from_config(cfg: &PurgeConfig) -> Self {
        let client = Self::new().endpoint(cfg.endpoint());
        match &cfg.api_key {
            Some(key) => client.api_key(key.clone()),
            None => client,
        }
    }

    pub fn from_transport(transport: impl Transport + 'static) -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            transport: Arc::new(transport),
        }
    }

    /// Sets the key sent as `Fastly-Key`. An empty key leaves the client
    /// unauthenticated.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    /// Overrides the API base URL used by `purge_all` and `purge_key`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.endpoint
    }

    /// Purges a single cached URL and returns the purge id reported by Fastly.
    ///
    /// The request goes to `url` itself with the `PURGE` verb, so no API key
    /// is needed unless the service requires authenticated purging.
    #[instrument(skip(self, mode))]
    pub fn purge_url(&self, url: &str, mode: impl IntoPurgeMode) -> PurgeResult<String> {
        let mode = mode.into_purge_mode()?;
        let target = Url::parse(url)
            .map_err(|err| PurgeError::InvalidInput(format!("invalid purge url {url:?}: {err}")))?;
        if !target.has_host() {
            return Err(PurgeError::InvalidInput(format!(
                "purge url {url:?} has no host"
            )));
        }

        self.execute(PurgeMethod::Purge, target, mode, true)?
            .ok_or(PurgeError::MissingId)
    }

    /// Purges everything cached for `service`.
    #[instrument(skip(self, mode))]
    pub fn purge_all(&self, service: &str, mode: impl IntoPurgeMode) -> PurgeResult<()> {
        self.require_api_key()?;
        if service.is_empty() {
            return Err(PurgeError::MissingService);
        }
        let mode = mode.into_purge_mode()?;
        let target = self.api_url(&["service", service, "purge_all"])?;

        self.execute(PurgeMethod::Post, target, mode, false)?;
        Ok(())
    }

    /// Purges every object tagged with surrogate key `key` in `service`.
    #[instrument(skip(self, mode))]
    pub fn purge_key(&self, service: &str, key: &str, mode: impl IntoPurgeMode) -> PurgeResult<()> {
        self.require_api_key()?;
        if service.is_empty() {
            return Err(PurgeError::MissingService);
        }
        if key.is_empty() {
            return Err(PurgeError::MissingKey);
        }
        let mode = mode.into_purge_mode()?;
        let mut segments = vec!["service", service, "purge"];
        segments.extend(key.split('/'));
        let target = self.api_url(&segments)?;

        self.execute(PurgeMethod::Post, target, mode, false)?;
        Ok(())
    }

    fn require_api_key(&self) -> PurgeResult<()> {
        if self.api_key.is_none() {
            return Err(PurgeError::MissingApiKey);
        }
        Ok(())
    }

    /// Appends `segments` to the endpoint path verbatim. Dot segments are
    /// refused since the URL would resolve them to a different API path.
    fn api_url(&self, segments: &[&str]) -> PurgeResult<Url> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(PurgeError::InvalidInput(format!(
                "path segment {dot:?} is not allowed in a purge target"
            )));
        }

        let mut url = Url::parse(&self.endpoint).map_err(|err| {
            PurgeError::InvalidInput(format!("invalid api endpoint {:?}: {err}", self.endpoint))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                PurgeError::InvalidInput(format!("api endpoint {:?} cannot be a base", self.endpoint))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn execute(
        &self,
        method: PurgeMethod,
        target: Url,
        mode: PurgeMode,
        id_expected: bool,
    ) -> PurgeResult<Option<String>> {
        let mut request = PurgeRequest::new(method, target);
        if mode.is_soft() {
            request = request.with_header(HEADER_SOFT_PURGE, "1");
        }
        if let Some(key) = &self.api_key {
            request = request.with_header(HEADER_API_KEY, key.as_str());
        }

        debug!(%method, url = %request.url, %mode, "sending purge request");
        let response = match self.transport.send(request) {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "purge request could not be sent");
                return Err(err);
            }
        };

        if response.status != 200 {
            warn!(
                status = response.status,
                body_len = response.body.len(),
                "purge request rejected"
            );
            return Err(PurgeError::UnexpectedStatus(response.status));
        }

        let outcome = PurgeResponse::from_slice(&response.body)?.into_outcome(id_expected);
        match &outcome {
            Ok(id) => debug!(?id, "purge accepted"),
            Err(err) => warn!(error = %err, "purge not acknowledged"),
        }
        outcome
    }
}

impl Default for PurgeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PurgeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurgeClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
