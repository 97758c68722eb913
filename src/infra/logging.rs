use crate::infra::config;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_new(config::log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
