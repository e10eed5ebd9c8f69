//! Conversion pipeline orchestration
//!
//! [`MissionConverter`] ties the stages together: option validation, the
//! per-line Flight Planner parse, the heading post-pass and serialization
//! into the requested mission format.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::Result;
use crate::app::models::{AltitudeMode, Waypoint};
use crate::app::services::flight_plan_parser::{FlightPlanParser, ParseStats};
use crate::app::services::mission_writer::OutputFormat;
use crate::app::services::navigation::resolve_headings;
use crate::config::ConverterOptions;

/// Converted waypoints with headings resolved
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Waypoints in input order
    pub waypoints: Vec<Waypoint>,

    /// Line-level parsing statistics
    pub stats: ParseStats,
}

/// Summary of one completed conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Format the mission was written in
    pub format: OutputFormat,

    /// Number of waypoints written
    pub waypoints_written: usize,

    /// Waypoints written with absolute altitude in an AGL run
    pub absolute_waypoints: usize,

    /// Line-level parsing statistics
    pub parse: ParseStats,
}

impl ConversionStats {
    /// One-line summary for logs and terminal output
    pub fn summary(&self) -> String {
        format!(
            "{} waypoints written as {} ({} lines skipped, {} AGL fallbacks)",
            self.waypoints_written,
            self.format,
            self.parse.lines_skipped,
            self.parse.agl_fallbacks
        )
    }
}

/// Converts Flight Planner exports into mission files
///
/// Options are validated once in [`MissionConverter::new`]; a converter that
/// exists is always configured correctly.
///
/// # Example
///
/// ```rust
/// use fp2lm::app::services::converter::MissionConverter;
/// use fp2lm::app::services::mission_writer::OutputFormat;
/// use fp2lm::config::ConverterOptions;
///
/// # fn example() -> fp2lm::Result<()> {
/// let converter = MissionConverter::new(ConverterOptions::default())?;
/// let input = "1,0,0,310,45,-89.4012,43.0731\n2,0,0,310,45,-89.4000,43.0731\n";
///
/// let mut output = Vec::new();
/// let stats = converter.process(input.as_bytes(), &mut output, OutputFormat::Csv)?;
/// assert_eq!(stats.waypoints_written, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MissionConverter {
    parser: FlightPlanParser,
}

impl MissionConverter {
    /// Create a converter, rejecting invalid options before any I/O
    pub fn new(options: ConverterOptions) -> Result<Self> {
        let parser = FlightPlanParser::from_options(&options)?;
        debug!(
            altitude_mode = %parser.settings().defaults.altitude_mode,
            gimbal_pitch = options.gimbal_pitch,
            photo_interval = %options.photo_interval,
            max_altitude_agl = options.max_altitude_agl,
            "Converter configured"
        );

        Ok(Self { parser })
    }

    /// Parse the input and resolve headings
    pub fn convert<R: BufRead>(&self, input: R) -> Result<ConversionResult> {
        let parsed = self.parser.parse_reader(input)?;

        let mut waypoints = parsed.waypoints;
        resolve_headings(&mut waypoints);

        if waypoints.is_empty() {
            warn!("No usable waypoints found in input");
        }

        Ok(ConversionResult {
            waypoints,
            stats: parsed.stats,
        })
    }

    /// Convert the input and write the mission in `format`
    pub fn process<R: BufRead>(
        &self,
        input: R,
        output: &mut dyn Write,
        format: OutputFormat,
    ) -> Result<ConversionStats> {
        let converted = self.convert(input)?;

        format
            .serializer()
            .write_mission(&converted.waypoints, output)?;

        let stats = ConversionStats {
            format,
            waypoints_written: converted.waypoints.len(),
            absolute_waypoints: count_absolute(&converted.waypoints),
            parse: converted.stats,
        };

        info!("{}", stats.summary());
        Ok(stats)
    }
}

fn count_absolute(waypoints: &[Waypoint]) -> usize {
    waypoints
        .iter()
        .filter(|wp| wp.altitude_mode == AltitudeMode::Absolute)
        .count()
}
