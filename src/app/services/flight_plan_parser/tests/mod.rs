//! Test utilities for Flight Planner parser testing
//!
//! This module provides sample exports and helpers shared by the parser test
//! modules.

use csv::StringRecord;

use super::parser::{FlightPlanParser, ParserSettings};
use crate::config::ConverterOptions;

mod header_tests;

/// Header row as written by the exporter
pub const SAMPLE_HEADER: &str = "Waypoint Number,X [m],Y [m],Alt. ASL [m],Alt. AGL [m],xcoord,ycoord";

/// Helper to create a small export with a header and three waypoints
pub fn create_sample_export() -> String {
    format!(
        "{}\n\
         1,0.0,0.0,310.5,45.0,-89.4012000,43.0731000\n\
         2,50.0,0.0,312.0,46.5,-89.4005800,43.0731000\n\
         3,50.0,50.0,311.25,45.75,-89.4005800,43.0735500\n",
        SAMPLE_HEADER
    )
}

/// Helper to build a record from a comma-separated line
pub fn record(line: &str) -> StringRecord {
    StringRecord::from(line.split(',').collect::<Vec<_>>())
}

/// Helper to create a parser with default options
pub fn default_parser() -> FlightPlanParser {
    FlightPlanParser::from_options(&ConverterOptions::default()).unwrap()
}

/// Helper to create settings for a given altitude mode
pub fn settings_for(mode: &str) -> ParserSettings {
    ParserSettings::from_options(&ConverterOptions::default().with_altitude_mode(mode)).unwrap()
}
