//! Occlum version identification
//!
//! The three version components of the Occlum LibOS are fixed at build time
//! and turned into a version string at compile time. The string can be
//! embedded anywhere a `&'static str` is accepted, reported through the
//! `occlum-version` binary, or logged at startup.
//!
//! # Build-time configuration
//!
//! The components default to the package version and can be overridden with
//! `OCCLUM_MAJOR_VERSION`, `OCCLUM_MINOR_VERSION` and `OCCLUM_PATCH_VERSION`.
//! A value that is not a non-negative integer fails the build.
//!
//! # Examples
//!
//! ```rust
//! use occlum_version::{CURRENT, VERSION_STRING, Version};
//!
//! assert_eq!(VERSION_STRING, CURRENT.to_string());
//! assert_eq!(Version::new(10, 2, 33).to_string(), "10.2.33");
//! assert_eq!(Version::new(10, 2, 33).legacy_string(), "10.10.33");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod version;

// Shared with build.rs, compiled here for its tests
#[cfg(test)]
#[path = "../build/components.rs"]
mod build_components;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use version::{
    CURRENT, LEGACY_VERSION_STRING, MAJOR, MINOR, PATCH, Rendering, VERSION_STRING, Version,
    VersionReport,
};
