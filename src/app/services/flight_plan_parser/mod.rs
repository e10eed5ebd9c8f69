//! Flight Planner CSV parser for survey waypoint exports
//!
//! This module reads the waypoint table exported by the flight-planning tool
//! and turns each usable line into a [`Waypoint`](crate::app::models::Waypoint)
//! carrying the run-wide defaults.
//!
//! ## Architecture
//!
//! - [`parser`] - Line loop, CSV record extraction and skip accounting
//! - [`header`] - Detection of the exporter's header row
//! - [`record_parser`] - One record to one waypoint, altitude-mode policy
//! - [`field_parsers`] - Numeric field parsing and range validation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use fp2lm::app::services::flight_plan_parser::FlightPlanParser;
//! use fp2lm::config::ConverterOptions;
//!
//! # fn example() -> fp2lm::Result<()> {
//! let parser = FlightPlanParser::from_options(&ConverterOptions::default())?;
//! let result = parser.parse_str("1,0,0,310.5,45.0,-89.4012,43.0731\n")?;
//!
//! assert_eq!(result.waypoints.len(), 1);
//! assert_eq!(result.stats.lines_skipped, 0);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_parsers::{FieldKind, FieldValue, is_missing_value, parse_field};
pub use parser::{FlightPlanParser, ParserSettings};
pub use stats::{ParseResult, ParseStats};
