//! Error handling
//!
//! This module defines the error type used by the configuration and reporting layers.

pub mod types;

pub use types::{Error, Result};
