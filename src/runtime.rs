//! # Runtime Initialization
//!
//! Process setup shared by the binaries: rustls crypto provider and the
//! tracing subscriber.

use crate::config::{LogFormat, OperatorConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the ring crypto provider for rustls
///
/// Must run before any Kubernetes client is created. Installing twice is
/// harmless; the second attempt is ignored.
pub fn init_rustls() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider was already installed");
    }
}

/// Build the env filter: `RUST_LOG` wins, then the configured level
#[must_use]
pub fn env_filter(config: &OperatorConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.log_level.to_ascii_lowercase();
        EnvFilter::new(format!("cloud_credential_operator={level},credctl={level},warn"))
    })
}

/// Initialize the global tracing subscriber
pub fn init_tracing(config: &OperatorConfig) {
    // stdout carries command output (tables, rendered YAML)
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr);
    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if let Err(e) = result {
        eprintln!("Tracing subscriber already initialized: {e}");
        return;
    }

    info!(
        "Build info: version={}, datetime={}, git_hash={}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATETIME"),
        env!("BUILD_GIT_HASH")
    );
}
