use thiserror::Error;

pub type PurgeResult<T> = Result<T, PurgeError>;

#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("invalid purge mode: {0}")]
    InvalidPurgeMode(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("api key is required for this purge")]
    MissingApiKey,
    #[error("service is required for this purge")]
    MissingService,
    #[error("purge key is required")]
    MissingKey,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response code, expected 200, got {0}")]
    UnexpectedStatus(u16),
    #[error("failed to decode purge response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("purge failed with status {}", .0.as_deref().unwrap_or("<missing>"))]
    PurgeFailed(Option<String>),
    #[error("no id returned for purge")]
    MissingId,
}

impl PurgeError {
    /// True for errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PurgeError::InvalidPurgeMode(_)
                | PurgeError::InvalidInput(_)
                | PurgeError::MissingApiKey
                | PurgeError::MissingService
                | PurgeError::MissingKey
        )
    }

    /// The HTTP status carried by an `UnexpectedStatus` error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PurgeError::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }
}
