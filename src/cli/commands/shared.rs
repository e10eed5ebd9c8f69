//! Shared components for CLI commands
//!
//! This module contains the logging setup, configuration layering and
//! input/output plumbing used by the command implementations.

use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::app::services::converter::ConversionStats;
use crate::app::services::mission_writer::OutputFormat;
use crate::cli::args::{ConvertArgs, SummaryFormat};
use crate::config::Config;

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `log_level`.
/// Standard output is left alone because it may carry the mission.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fp2lm={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &ConvertArgs) -> Result<Config> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, checking the default location"),
    }

    let mut config = Config::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;

    apply_cli_overrides(&mut config, args);

    config.validate().context("Invalid converter options")?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ConvertArgs) {
    if let Some(mode) = &args.altitude_mode {
        config.converter.altitude_mode = mode.clone();
    }
    if let Some(distance) = args.distance {
        config.converter.photo_interval = distance;
    }
    if let Some(pitch) = args.pitch {
        config.converter.gimbal_pitch = pitch;
    }
    if let Some(max_altitude) = args.max_altitude {
        config.converter.max_altitude_agl = max_altitude;
    }

    config.output.format = resolve_output_format(args, config.output.format);
    if args.verbose > 0 || args.quiet {
        config.logging.level = args.get_log_level().to_string();
    }
}

/// Pick the output format: explicit flag, then output extension, then config
pub fn resolve_output_format(args: &ConvertArgs, configured: OutputFormat) -> OutputFormat {
    args.format
        .or_else(|| args.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or(configured)
}

/// Open the input file, or standard input when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            debug!("Reading waypoints from standard input");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}

/// Create the output file, or use standard output when no path is given
pub fn create_output(path: Option<&Path>, format: OutputFormat) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            let stdout = io::stdout();
            if format.is_binary() && stdout.is_terminal() {
                anyhow::bail!(
                    "Refusing to write binary {} output to a terminal; use -o FILE or redirect stdout",
                    format
                );
            }
            Ok(Box::new(BufWriter::new(stdout)))
        }
    }
}

/// Print the run summary to stderr
pub fn print_summary(
    stats: &ConversionStats,
    output: Option<&Path>,
    format: SummaryFormat,
) -> Result<()> {
    match format {
        SummaryFormat::Human => print_human_summary(stats, output),
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(stats)
                .context("Failed to serialize conversion summary")?;
            eprintln!("{}", json);
        }
    }
    Ok(())
}

fn print_human_summary(stats: &ConversionStats, output: Option<&Path>) {
    eprintln!();
    eprintln!("{}", "Mission conversion complete".bright_green().bold());
    eprintln!(
        "   • Waypoints written: {} ({})",
        stats.waypoints_written.to_string().bright_cyan(),
        stats.format
    );
    eprintln!("   • Lines read: {}", stats.parse.total_lines);

    if stats.parse.agl_fallbacks > 0 {
        eprintln!(
            "   • {} waypoint(s) fell back to ASL altitude",
            stats.parse.agl_fallbacks.to_string().bright_yellow()
        );
    }

    if stats.parse.lines_skipped > 0 {
        eprintln!(
            "{}",
            format!("   • Lines skipped: {}", stats.parse.lines_skipped).bright_yellow()
        );
        for reason in stats.parse.errors.iter().take(5) {
            eprintln!("     {}", reason.bright_black());
        }
        if stats.parse.errors.len() > 5 {
            eprintln!("     ... and {} more", stats.parse.errors.len() - 5);
        }
    }

    if let Some(path) = output {
        eprintln!("   • Wrote {}", path.display().to_string().bright_white());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;
    use std::io::Read;
    use tempfile::TempDir;

    fn convert_args(args: &[&str]) -> ConvertArgs {
        let argv = std::iter::once("fp2lm")
            .chain(std::iter::once("convert"))
            .chain(args.iter().copied());
        match Args::parse_from(argv).command {
            Some(Commands::Convert(convert)) => convert,
            other => panic!("expected convert command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let args = convert_args(&["--altitude-mode", "asl", "--pitch", "-30", "-d", "10m"]);
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.converter.altitude_mode, "asl");
        assert_eq!(config.converter.gimbal_pitch, -30.0);
        assert_eq!(config.converter.photo_interval.value(), 10.0);
        assert_eq!(config.converter.max_altitude_agl, 120.0);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_output_format_resolution() {
        let args = convert_args(&[]);
        assert_eq!(resolve_output_format(&args, OutputFormat::Kml), OutputFormat::Kml);

        let args = convert_args(&["-o", "mission.kmz"]);
        assert_eq!(resolve_output_format(&args, OutputFormat::Csv), OutputFormat::Kmz);

        let args = convert_args(&["-o", "mission.kmz", "-f", "csv"]);
        assert_eq!(resolve_output_format(&args, OutputFormat::Kml), OutputFormat::Csv);

        let args = convert_args(&["-o", "mission.out"]);
        assert_eq!(resolve_output_format(&args, OutputFormat::Kml), OutputFormat::Kml);
    }

    #[test]
    fn test_load_configuration_rejects_invalid_pitch() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[converter]\ngimbal_pitch = -45.0\n").unwrap();

        let path = config_path.to_str().unwrap();
        let config = load_configuration(&convert_args(&["-c", path])).unwrap();
        assert_eq!(config.converter.gimbal_pitch, -45.0);

        let err = load_configuration(&convert_args(&["-c", path, "--pitch", "20"])).unwrap_err();
        assert!(format!("{:#}", err).contains("gimbal pitch"));
    }

    #[test]
    fn test_open_missing_input() {
        let err = open_input(Some(Path::new("/nonexistent/plan.csv"))).err().unwrap();
        assert!(err.to_string().contains("Failed to open input file"));
    }

    #[test]
    fn test_output_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mission.csv");

        {
            let mut out = create_output(Some(&path), OutputFormat::Csv).unwrap();
            out.write_all(b"latitude\n").unwrap();
            out.flush().unwrap();
        }

        let mut input = open_input(Some(&path)).unwrap();
        let mut content = String::new();
        input.read_to_string(&mut content).unwrap();
        assert_eq!(content, "latitude\n");
    }
}
