//! Version report mode
//!
//! Loads the reporting configuration, applies command-line overrides and
//! prints the version on stdout.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    Settings,
    cli::logging::init_logging,
    config::{ConfigLoader, OutputFormat, OutputSettings, loader::CONFIG_ENV_VAR},
    version::{
        LEGACY_VERSION_STRING, Rendering, VERSION_STRING, VersionReport, with_build_info,
    },
};

/// Arguments for report mode
#[derive(Debug, Default)]
pub struct ReportArgs {
    pub format: Option<OutputFormat>,
    pub rendering: Option<Rendering>,
    pub detailed: bool,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Render the version according to the output settings
pub fn render(output: &OutputSettings) -> crate::Result<String> {
    match output.format {
        OutputFormat::Json => Ok(serde_json::to_string(&VersionReport::current())?),
        OutputFormat::Text => {
            let version = match output.rendering {
                Rendering::Standard => VERSION_STRING,
                Rendering::Legacy => LEGACY_VERSION_STRING,
            };
            if output.detailed {
                Ok(with_build_info(version))
            } else {
                Ok(version.to_string())
            }
        }
    }
}

/// Resolve settings with precedence: CLI > environment > config file > defaults
pub fn resolve_settings(args: &ReportArgs) -> Settings {
    // Tracing is not initialized yet, so problems with a path the user named go to stderr
    let explicit_path = args
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        .map(PathBuf::from);
    if let Some(path) = &explicit_path
        && !path.exists()
    {
        eprintln!(
            "Warning: Configuration file not found: {}. Using defaults.",
            path.display()
        );
    }

    let config_path = match &args.config {
        Some(config) => Some(PathBuf::from(config)),
        None => ConfigLoader::get_config_path(),
    };

    let mut settings = ConfigLoader::new()
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            // Can't use tracing here since it's not initialized yet
            eprintln!(
                "Warning: Failed to load configuration: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    if let Some(format) = args.format {
        settings.output.format = format;
    }
    if let Some(rendering) = args.rendering {
        settings.output.rendering = rendering;
    }
    if args.detailed {
        settings.output.detailed = true;
    }
    if args.verbose {
        settings.logging.verbose = true;
    }

    settings
}

/// Run report mode with the given arguments
pub fn run_report_mode(args: ReportArgs) -> Result<()> {
    let settings = resolve_settings(&args);

    init_logging(&settings.logging, args.verbose)?;

    info!("starting occlum-version v{}", VERSION_STRING);
    debug!("Output settings: {:?}", settings.output);

    let output = render(&settings.output)?;
    println!("{}", output);

    Ok(())
}
