//! Command-line entry points

pub mod logging;
pub mod report;

pub use report::{ReportArgs, render, run_report_mode};
