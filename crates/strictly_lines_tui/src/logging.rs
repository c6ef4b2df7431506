//! Tracing setup.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice keeps the
/// first subscriber.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
