//! Occlum version reporter
//!
//! # Usage
//!
//! ```bash
//! occlum-version                  # 0.13.0
//! occlum-version --legacy         # 0.0.0
//! occlum-version --rendering legacy
//! occlum-version --format json
//! occlum-version --detailed
//! occlum-version --version
//! ```

use clap::Parser;

use occlum_version::{
    Rendering, VERSION_STRING,
    cli::{ReportArgs, run_report_mode},
    config::OutputFormat,
};

#[derive(Parser)]
#[command(version = VERSION_STRING, about, long_about = None)]
#[command(name = "occlum-version")]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Version rendering
    #[arg(short, long, value_enum, value_name = "RENDERING")]
    rendering: Option<Rendering>,

    /// Shorthand for --rendering legacy (the major.major.patch form of the old C header)
    #[arg(long, conflicts_with = "rendering")]
    legacy: bool,

    /// Append git commit and build date
    #[arg(short, long)]
    detailed: bool,

    /// Configuration file path
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    run_report_mode(ReportArgs {
        format: cli.format,
        rendering: cli.rendering.or(cli.legacy.then_some(Rendering::Legacy)),
        detailed: cli.detailed,
        config: cli.config,
        verbose: cli.verbose,
    })
}
