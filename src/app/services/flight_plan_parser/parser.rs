//! Core Flight Planner parser implementation
//!
//! This module drives the per-line loop: CSV record extraction, header
//! skipping, waypoint construction and skip accounting. Every line is parsed
//! as its own record so a malformed line can never swallow the next one.

use std::borrow::Cow;
use std::io::BufRead;
use tracing::{debug, info, warn};

use super::header::is_header_record;
use super::record_parser::parse_waypoint_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{AltitudeMode, RunDefaults};
use crate::config::ConverterOptions;
use crate::{Error, Result};
use csv::StringRecord;

/// Validated settings shared by every record of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserSettings {
    pub defaults: RunDefaults,
    pub max_altitude_agl: f64,
}

impl ParserSettings {
    /// Validate converter options and derive parser settings from them
    pub fn from_options(options: &ConverterOptions) -> Result<Self> {
        let altitude_mode = options.validate()?;
        Ok(Self::with_mode(options, altitude_mode))
    }

    fn with_mode(options: &ConverterOptions, altitude_mode: AltitudeMode) -> Self {
        Self {
            defaults: RunDefaults {
                gimbal_pitch: options.gimbal_pitch,
                altitude_mode,
                photo_distance_interval: options.photo_interval,
            },
            max_altitude_agl: options.max_altitude_agl,
        }
    }
}

/// Parser for Flight Planner waypoint exports
///
/// Per-line problems (short rows, NaN coordinates, out-of-range values,
/// malformed CSV) skip the line and are recorded in [`ParseStats`]. Only
/// failing to read the input itself is an error.
#[derive(Debug, Clone)]
pub struct FlightPlanParser {
    settings: ParserSettings,
}

impl FlightPlanParser {
    /// Create a parser from already validated settings
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    /// Create a parser, validating the converter options first
    pub fn from_options(options: &ConverterOptions) -> Result<Self> {
        Ok(Self::new(ParserSettings::from_options(options)?))
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parse all lines of `input` into waypoints, in input order
    pub fn parse_reader<R: BufRead>(&self, input: R) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut waypoints = Vec::new();

        for (index, bytes) in input.split(b'\n').enumerate() {
            let line_number = index + 1;
            let bytes = bytes.map_err(|e| {
                Error::io(format!("Failed to read input line {}", line_number), e)
            })?;
            stats.total_lines += 1;

            let line = decode_line(&bytes, line_number);

            if line.trim().is_empty() {
                continue;
            }

            let record = match read_record(&line) {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(e) => {
                    warn!(line = line_number, error = %e, "Skipping unreadable CSV line");
                    stats.record_skip(line_number, e);
                    continue;
                }
            };

            if is_header_record(&record) {
                debug!("Skipping header row at line {}", line_number);
                stats.header_rows += 1;
                continue;
            }

            match parse_waypoint_record(&record, &self.settings) {
                Ok(parsed) => {
                    if parsed.agl_fallback {
                        stats.agl_fallbacks += 1;
                    }
                    waypoints.push(parsed.waypoint);
                    stats.waypoints_parsed += 1;
                }
                Err(e) if e.is_recoverable() => {
                    warn!(line = line_number, error = %e, "Skipping waypoint line");
                    stats.record_skip(line_number, e);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Parsed {} waypoints from {} lines ({} skipped, {} AGL fallbacks)",
            stats.waypoints_parsed, stats.total_lines, stats.lines_skipped, stats.agl_fallbacks
        );

        Ok(ParseResult { waypoints, stats })
    }

    /// Parse in-memory text
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes())
    }
}

/// Read one line as a single CSV record
fn read_record(line: &str) -> Result<Option<StringRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => Ok(Some(record)),
        Ok(false) => Ok(None),
        Err(e) => Err(Error::csv("Failed to parse CSV record", e)),
    }
}

/// Decode one raw input line, dropping a trailing carriage return
///
/// Invalid UTF-8 is replaced rather than rejected: a stray byte in a column
/// the converter never reads must not cost the waypoint, and one in a numeric
/// column fails that field's parse and skips the line.
fn decode_line(bytes: &[u8], line_number: usize) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        debug!(line = line_number, "Replaced invalid UTF-8 in input line");
    }
    line
}
