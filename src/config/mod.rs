//! Configuration management
//!
//! Controls how the version is reported. The version numbers themselves are
//! fixed at build time and are not configurable here.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{EnvOverrides, LoggingSettings, OutputFormat, OutputSettings, Settings};

// Tests in both submodules touch the process environment
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
