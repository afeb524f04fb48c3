//! Blocking client for Fastly's purge API: single URL, whole service and
//! surrogate key invalidation.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mode;
pub mod response;
pub mod transport;

pub use client::{PurgeClient, DEFAULT_API_ENDPOINT};
pub use config::PurgeConfig;
pub use error::{PurgeError, PurgeResult};
pub use mode::{IntoPurgeMode, PurgeMode};
pub use response::PurgeResponse;
pub use transport::{HttpTransport, PurgeMethod, PurgeRequest, Transport, TransportResponse};
