//! Logging setup for the CLI

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

/// Pick the log filter.
///
/// Precedence:
/// 1. CLI --verbose flag -> debug level
/// 2. RUST_LOG environment variable
/// 3. Config file logging.level
pub fn build_filter(settings: &LoggingSettings, verbose: bool) -> EnvFilter {
    if verbose || settings.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.level)
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only the version.
pub fn init_logging(settings: &LoggingSettings, verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(settings, verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
