use crate::error::{PurgeError, PurgeResult};
use serde::{Deserialize, Serialize};
use serde::de::Error as _;
use serde_json::Value;

pub const STATUS_OK: &str = "ok";

/// Acknowledgment body returned by the purge API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurgeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl PurgeResponse {
    /// Decodes an acknowledgment. Only a JSON object is accepted; a derived
    /// struct would also take a positional array.
    pub fn from_slice(body: &[u8]) -> PurgeResult<Self> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            other => Err(PurgeError::Decode(serde_json::Error::custom(format!(
                "expected a JSON object, found {other}"
            )))),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OK)
    }

    /// Checks the status and, when `id_expected`, returns the purge id.
    /// An empty id counts as missing.
    pub fn into_outcome(self, id_expected: bool) -> PurgeResult<Option<String>> {
        if !self.is_ok() {
            return Err(PurgeError::PurgeFailed(self.status));
        }
        if !id_expected {
            return Ok(None);
        }
        match self.id {
            Some(id) if !id.is_empty() => Ok(Some(id)),
            _ => Err(PurgeError::MissingId),
        }
    }
}
