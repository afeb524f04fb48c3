use crate::error::{PurgeError, PurgeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How cached content is invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeMode {
    /// Evict immediately.
    #[default]
    Instant,
    /// Mark stale; the edge keeps serving it while revalidating.
    Soft,
}

impl PurgeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurgeMode::Instant => "instant",
            PurgeMode::Soft => "soft",
        }
    }

    pub fn is_soft(&self) -> bool {
        matches!(self, PurgeMode::Soft)
    }
}

impl fmt::Display for PurgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for PurgeMode {
    type Error = PurgeError;

    fn try_from(value: i64) -> PurgeResult<Self> {
        match value {
            0 => Ok(PurgeMode::Instant),
            1 => Ok(PurgeMode::Soft),
            other => Err(PurgeError::InvalidPurgeMode(other.to_string())),
        }
    }
}

impl FromStr for PurgeMode {
    type Err = PurgeError;

    fn from_str(s: &str) -> PurgeResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instant" => Ok(PurgeMode::Instant),
            "soft" => Ok(PurgeMode::Soft),
            _ => Err(PurgeError::InvalidPurgeMode(s.to_string())),
        }
    }
}

/// Anything a purge operation accepts as its mode. Raw values are checked
/// against the two known modes before a request is built.
pub trait IntoPurgeMode {
    fn into_purge_mode(self) -> PurgeResult<PurgeMode>;
}

impl IntoPurgeMode for PurgeMode {
    fn into_purge_mode(self) -> PurgeResult<PurgeMode> {
        Ok(self)
    }
}

impl IntoPurgeMode for i64 {
    fn into_purge_mode(self) -> PurgeResult<PurgeMode> {
        PurgeMode::try_from(self)
    }
}

impl IntoPurgeMode for &str {
    fn into_purge_mode(self) -> PurgeResult<PurgeMode> {
        self.parse()
    }
}
