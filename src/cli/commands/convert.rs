//! Convert command implementation
//!
//! Reads a Flight Planner export from a file or stdin and writes the mission
//! to a file or stdout.

use anyhow::{Context, Result};
use tracing::info;

use super::shared::{create_output, load_configuration, open_input, print_summary, setup_logging};
use crate::app::services::converter::{ConversionStats, MissionConverter};
use crate::cli::args::ConvertArgs;

/// Run the convert command
pub fn run_convert(args: ConvertArgs) -> Result<ConversionStats> {
    args.validate().context("Invalid arguments")?;
    let config = load_configuration(&args)?;
    setup_logging(&config.logging.level, args.quiet)?;

    let format = config.output.format;

    // Options are checked before anything is opened or created
    let converter = MissionConverter::new(config.converter.clone())?;

    let input = open_input(args.input_path())?;
    let mut output = create_output(args.output.as_deref(), format)?;

    info!(
        "Converting {} to {}",
        args.input_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string()),
        format
    );

    let stats = converter
        .process(input, output.as_mut(), format)
        .context("Conversion failed")?;
    output.flush().context("Failed to flush mission output")?;

    if args.show_summary() {
        print_summary(&stats, args.output.as_deref(), args.summary)?;
    }

    Ok(stats)
}
