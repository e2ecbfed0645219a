//! Version information
//!
//! The three components are resolved by the build script and the version
//! strings are formatted from them at compile time, so nothing here can drift
//! out of sync with the numbers it is derived from.

use std::fmt;

use const_format::formatcp;
use serde::{Deserialize, Serialize};

mod components {
    include!(concat!(env!("OUT_DIR"), "/version_components.rs"));
}

pub use components::{MAJOR, MINOR, PATCH};

/// Version string, `MAJOR.MINOR.PATCH`.
pub const VERSION_STRING: &str = formatcp!("{MAJOR}.{MINOR}.{PATCH}");

/// Version string as the old C header rendered it: the major component appears
/// twice and the minor component is dropped.
///
/// Only for consumers that still match on that output.
pub const LEGACY_VERSION_STRING: &str = formatcp!("{MAJOR}.{MAJOR}.{PATCH}");

/// The version this artifact was built as.
pub const CURRENT: Version = Version::new(MAJOR, MINOR, PATCH);

/// Git commit hash (set at compile time)
pub const GIT_HASH: Option<&str> = option_env!("GIT_HASH");

/// Build date (set at compile time)
pub const BUILD_DATE: Option<&str> = option_env!("BUILD_DATE");

/// A major/minor/patch triple.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which text form a [`Version`] is rendered in.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Rendering {
    /// `major.minor.patch`
    #[default]
    Standard,
    /// `major.major.patch`
    Legacy,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Render with the major component duplicated in place of the minor one.
    pub fn legacy_string(&self) -> String {
        format!("{}.{}.{}", self.major, self.major, self.patch)
    }

    pub fn render(&self, rendering: Rendering) -> String {
        match rendering {
            Rendering::Standard => self.to_string(),
            Rendering::Legacy => self.legacy_string(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Get the current version string
pub fn get_version() -> &'static str {
    VERSION_STRING
}

/// Get detailed version information including git commit and build date
pub fn detailed_version() -> String {
    with_build_info(VERSION_STRING)
}

/// Append `(commit@date)` to an already rendered version.
pub fn with_build_info(version: &str) -> String {
    format!(
        "{} ({}@{})",
        version,
        GIT_HASH.unwrap_or("unknown"),
        BUILD_DATE.unwrap_or("unknown")
    )
}

/// Machine-readable description of the current build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionReport {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub version: &'static str,
    pub legacy_version: &'static str,
    pub git_hash: Option<&'static str>,
    pub build_date: Option<&'static str>,
}

impl VersionReport {
    pub fn current() -> Self {
        Self {
            major: MAJOR,
            minor: MINOR,
            patch: PATCH,
            version: VERSION_STRING,
            legacy_version: LEGACY_VERSION_STRING,
            git_hash: GIT_HASH,
            build_date: BUILD_DATE,
        }
    }
}
