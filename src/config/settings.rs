//! Configuration settings
//!
//! Settings come from a TOML file, environment variables, and command-line
//! overrides. None of them can change the version numbers themselves, which
//! are fixed at build time; they only control how the version is reported.

use serde::{Deserialize, Serialize};

use crate::version::Rendering;

fn default_log_level() -> String {
    "warn".to_string()
}

/// Output format for version reports
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain version string
    #[default]
    Text,
    /// JSON object with every component
    Json,
}

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Output configuration
    #[serde(default)]
    pub output: OutputSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How the version is printed
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputSettings {
    /// Output format (text, json)
    #[serde(default)]
    pub format: OutputFormat,
    /// Version rendering (standard, legacy)
    #[serde(default)]
    pub rendering: Rendering,
    /// Append git commit and build date in text output
    #[serde(default)]
    pub detailed: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

fn parse_format(value: &str) -> crate::Result<OutputFormat> {
    match value.trim().to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(crate::Error::validation_with_value(
            "format",
            "Expected 'text' or 'json'",
            other,
        )),
    }
}

fn parse_rendering(value: &str) -> crate::Result<Rendering> {
    match value.trim().to_lowercase().as_str() {
        "standard" => Ok(Rendering::Standard),
        "legacy" => Ok(Rendering::Legacy),
        other => Err(crate::Error::validation_with_value(
            "rendering",
            "Expected 'standard' or 'legacy'",
            other,
        )),
    }
}

fn parse_flag(value: &str) -> crate::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(crate::Error::validation_with_value(
            "verbose",
            "Expected a boolean (1/0, true/false, yes/no, on/off)",
            other,
        )),
    }
}

/// Values set through environment variables
///
/// A field is `Some` exactly when its variable is set, so an override that
/// happens to equal the built-in default still replaces a config file value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    /// OCCLUM_VERSION_FORMAT
    pub format: Option<OutputFormat>,
    /// OCCLUM_VERSION_RENDERING
    pub rendering: Option<Rendering>,
    /// LOG_LEVEL
    pub log_level: Option<String>,
    /// VERBOSE
    pub verbose: Option<bool>,
}

impl EnvOverrides {
    /// Read every supported variable from the process environment
    pub fn from_env() -> crate::Result<Self> {
        let mut overrides = Self::default();

        if let Ok(format) = std::env::var("OCCLUM_VERSION_FORMAT") {
            overrides.format = Some(parse_format(&format)?);
        }

        if let Ok(rendering) = std::env::var("OCCLUM_VERSION_RENDERING") {
            overrides.rendering = Some(parse_rendering(&rendering)?);
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            overrides.log_level = Some(level);
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            overrides.verbose = Some(parse_flag(&verbose)?);
        }

        Ok(overrides)
    }

    /// Overwrite every field that was set
    pub fn apply(self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        if let Some(rendering) = self.rendering {
            settings.output.rendering = rendering;
        }
        if let Some(level) = self.log_level {
            settings.logging.level = level;
        }
        if let Some(verbose) = self.verbose {
            settings.logging.verbose = verbose;
        }
    }
}

impl Settings {
    /// Load settings from environment variables on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();
        EnvOverrides::from_env()?.apply(&mut settings);
        Ok(settings)
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        EnvOverrides::from_env()?.apply(&mut self);
        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(crate::Error::config(
                "log_level",
                &format!("Invalid log level: {}", self.logging.level),
            )),
        }
    }
}
