//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation.

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "OCCLUM_VERSION_CONFIG";

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Get the config file path from OCCLUM_VERSION_CONFIG or the default location
    ///
    /// Priority:
    /// 1. OCCLUM_VERSION_CONFIG environment variable
    /// 2. ~/.config/occlum-version/config.toml (or platform equivalent)
    pub fn get_config_path() -> Option<PathBuf> {
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(config_path);
            if path.exists() {
                debug!("Using config file from {}: {:?}", CONFIG_ENV_VAR, path);
                return Some(path);
            }
            warn!("{} points to non-existent file: {:?}", CONFIG_ENV_VAR, path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("occlum-version").join("config.toml");
            if default_path.exists() {
                debug!("Using default config file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("No config file found");
        None
    }

    /// Load configuration with precedence order:
    /// 1. Environment variables
    /// 2. Configuration file
    /// 3. Default values
    ///
    /// Command-line overrides are applied by the caller on the returned value.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading configuration from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;

        settings.validate()?;

        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::version::Rendering;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_defaults() {
        let loader = ConfigLoader::new();
        assert_eq!(loader.defaults(), &Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let _lock = crate::config::ENV_TEST_MUTEX.lock().unwrap();

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[output]
format = "json"
detailed = true
        "#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let settings = loader.load(Some(temp_file.path())).unwrap();

        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.output.detailed);
        assert_eq!(settings.output.rendering, Rendering::Standard);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let _lock = crate::config::ENV_TEST_MUTEX.lock().unwrap();

        let loader = ConfigLoader::new();
        let settings = loader
            .load(Some(Path::new("/nonexistent/occlum-version.toml")))
            .unwrap();
        assert_eq!(settings.output, Settings::default().output);
    }

    #[test]
    fn test_env_overrides_file() {
        let _lock = crate::config::ENV_TEST_MUTEX.lock().unwrap();

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[output]\nrendering = \"standard\"").unwrap();

        unsafe {
            std::env::set_var("OCCLUM_VERSION_RENDERING", "legacy");
        }

        let result = ConfigLoader::new().load(Some(temp_file.path()));

        unsafe {
            std::env::remove_var("OCCLUM_VERSION_RENDERING");
        }

        assert_eq!(result.unwrap().output.rendering, Rendering::Legacy);
    }

    #[test]
    fn test_invalid_level_fails_validation() {
        let _lock = crate::config::ENV_TEST_MUTEX.lock().unwrap();

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[logging]\nlevel = \"chatty\"").unwrap();

        let result = ConfigLoader::new().load(Some(temp_file.path()));
        assert!(result.is_err());
    }
}
