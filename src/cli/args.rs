//! Command-line argument definitions for fp2lm
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::services::mission_writer::OutputFormat;
use crate::units::Meters;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the Flight Planner to Litchi converter
///
/// Converts survey waypoints exported by a flight-planning tool into Litchi
/// Mission Hub CSV, KML or KMZ missions.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fp2lm",
    version,
    about = "Convert Flight Planner waypoint exports into Litchi missions",
    long_about = "Reads the waypoint CSV exported by a flight-planning tool, validates every \
                  line, computes a heading toward the next waypoint and writes a Litchi Mission \
                  Hub CSV, KML or KMZ mission. Malformed lines are skipped with a warning."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a Flight Planner export into a mission (main command)
    Convert(ConvertArgs),
    /// Print camera bearings for a regular-polygon orbit
    Orbit(OrbitArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Flight Planner CSV export to read
    ///
    /// Reads standard input when omitted or given as "-".
    #[arg(value_name = "INPUT", help = "Flight Planner CSV export (default: stdin)")]
    pub input: Option<PathBuf>,

    /// Mission file to write
    ///
    /// Writes standard output when omitted. When --format is not given the
    /// format is taken from the file extension (.csv, .kml, .kmz).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output mission file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Mission output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Output format [default: csv, or from output extension]"
    )]
    pub format: Option<OutputFormat>,

    /// Distance between photos
    ///
    /// A number with a unit, e.g. 20m or 60ft. Feet are converted to meters.
    #[arg(
        short = 'd',
        long = "distance",
        value_name = "DISTANCE",
        help = "Photo interval distance (e.g. 20m or 60ft)"
    )]
    pub distance: Option<Meters>,

    /// Altitude reference: agl (above ground) or asl (above sea level)
    #[arg(
        long = "altitude-mode",
        value_name = "MODE",
        help = "Altitude mode: agl or asl [default: agl]"
    )]
    pub altitude_mode: Option<String>,

    /// Gimbal pitch in degrees
    #[arg(
        long = "pitch",
        value_name = "DEGREES",
        allow_negative_numbers = true,
        help = "Gimbal pitch angle, -90 to 0 [default: -90]"
    )]
    pub pitch: Option<f64>,

    /// Highest AGL altitude accepted, in meters
    #[arg(
        long = "max-altitude",
        value_name = "METERS",
        help = "Maximum allowed altitude AGL in meters [default: 120]"
    )]
    pub max_altitude: Option<f64>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/fp2lm/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Format of the run summary printed to stderr
    #[arg(
        long = "summary",
        value_enum,
        default_value = "human",
        help = "Run summary format"
    )]
    pub summary: SummaryFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides the summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the orbit command
#[derive(Debug, Clone, Parser)]
pub struct OrbitArgs {
    /// Number of polygon sides (at least 3)
    #[arg(value_name = "SIDES")]
    pub sides: usize,

    /// Polygon diameter in meters
    #[arg(value_name = "DIAMETER")]
    pub diameter: f64,

    /// Output format
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the polygon"
    )]
    pub output_format: SummaryFormat,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.input_path() {
            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Input file, or None when reading standard input
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check whether the run summary should be printed
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("fp2lm").chain(args.iter().copied()))
    }

    fn convert_args(args: &[&str]) -> ConvertArgs {
        match parse(args).unwrap().command {
            Some(Commands::Convert(convert)) => convert,
            other => panic!("expected convert command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        assert!(parse(&[]).unwrap().command.is_none());
    }

    #[test]
    fn test_convert_defaults() {
        let args = convert_args(&["convert"]);

        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(args.format.is_none());
        assert!(args.distance.is_none());
        assert_eq!(args.summary, SummaryFormat::Human);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.show_summary());
    }

    #[test]
    fn test_convert_all_flags() {
        let args = convert_args(&[
            "convert",
            "plan.csv",
            "-o",
            "mission.kmz",
            "-f",
            "kmz",
            "-d",
            "60ft",
            "--altitude-mode",
            "asl",
            "--pitch",
            "-45",
            "--max-altitude",
            "100",
            "--summary",
            "json",
            "-vv",
        ]);

        assert_eq!(args.input, Some(PathBuf::from("plan.csv")));
        assert_eq!(args.output, Some(PathBuf::from("mission.kmz")));
        assert_eq!(args.format, Some(OutputFormat::Kmz));
        assert!((args.distance.unwrap().value() - 18.288).abs() < 1e-9);
        assert_eq!(args.altitude_mode.as_deref(), Some("asl"));
        assert_eq!(args.pitch, Some(-45.0));
        assert_eq!(args.max_altitude, Some(100.0));
        assert_eq!(args.summary, SummaryFormat::Json);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_distance_requires_unit() {
        assert!(parse(&["convert", "-d", "20"]).is_err());
        assert!(parse(&["convert", "-d", "20 parsecs"]).is_err());
        assert!(parse(&["convert", "-d", "20m"]).is_ok());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(parse(&["convert", "-f", "gpx"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(parse(&["convert", "-q", "-v"]).is_err());

        let args = convert_args(&["convert", "-q"]);
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_summary());
    }

    #[test]
    fn test_stdin_dash() {
        let args = convert_args(&["convert", "-"]);
        assert!(args.input_path().is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_convert_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("plan.csv");
        std::fs::write(&input, "1,0,0,10,10,0,0\n").unwrap();

        let mut args = convert_args(&["convert"]);
        args.input = Some(input.clone());
        args.output = Some(temp_dir.path().join("mission.csv"));
        assert!(args.validate().is_ok());

        // Missing input file
        args.input = Some(temp_dir.path().join("missing.csv"));
        assert!(args.validate().is_err());

        // Output directory does not exist
        args.input = Some(input);
        args.output = Some(temp_dir.path().join("nope").join("mission.csv"));
        assert!(args.validate().is_err());

        // Bare file name in the working directory is fine
        args.output = Some(PathBuf::from("mission.csv"));
        assert!(args.validate().is_ok());

        // Missing config file
        args.config_file = Some(temp_dir.path().join("missing.toml"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_orbit_args() {
        match parse(&["orbit", "6", "80"]).unwrap().command {
            Some(Commands::Orbit(orbit)) => {
                assert_eq!(orbit.sides, 6);
                assert_eq!(orbit.diameter, 80.0);
                assert_eq!(orbit.output_format, SummaryFormat::Human);
            }
            other => panic!("expected orbit command, got {:?}", other),
        }

        assert!(parse(&["orbit", "six", "80"]).is_err());
        assert!(parse(&["orbit", "6"]).is_err());
    }
}
