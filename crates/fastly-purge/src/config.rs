use crate::client::DEFAULT_API_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const API_KEY_VAR: &str = "FASTLY_API_KEY";
pub const ENDPOINT_VAR: &str = "FASTLY_API_ENDPOINT";

/// Construction settings for a `PurgeClient`. Both fields are optional: no
/// key means unauthenticated, no endpoint means the production API.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PurgeConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl PurgeConfig {
    /// Reads `FASTLY_API_KEY` and `FASTLY_API_ENDPOINT` from the process
    /// environment. Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, but first loads a `.env` file (if any) into the
    /// process environment. That is a process-wide side effect, so only
    /// programs that own their environment should call this.
    pub fn from_dotenv() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            api_key: read(API_KEY_VAR),
            endpoint: read(ENDPOINT_VAR),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or(DEFAULT_API_ENDPOINT)
    }
}

impl fmt::Debug for PurgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurgeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
