use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: quiet dependencies, purge outcomes
/// from this crate.
pub const DEFAULT_FILTER: &str = "warn,fastly_purge=info";

/// Installs a fmt subscriber for programs embedding the purge client.
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    init_logging_with(DEFAULT_FILTER);
}

pub fn init_logging_with(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
