//! Harness logging through `tracing`.
//!
//! Logs go to stderr and never replace the diagnostic stream on stdout.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `config.log_filter`. A second call, or a subscriber installed by the host
/// program, leaves the existing one in place.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
