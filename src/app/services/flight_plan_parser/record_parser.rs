//! Individual record parsing for Flight Planner exports
//!
//! This module turns one CSV record into a waypoint: coordinates, altitude
//! resolution against the configured altitude mode, and the per-waypoint
//! AGL-to-ASL fallback.

use csv::StringRecord;
use tracing::warn;

use super::field_parsers::{get_field, is_missing_value, parse_real};
use super::parser::ParserSettings;
use crate::app::models::{AltitudeMode, GeoPoint, Waypoint};
use crate::constants::input_columns;
use crate::{Error, Result};

/// A waypoint parsed from one record
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWaypoint {
    pub waypoint: Waypoint,

    /// True when AGL was requested but the record's ASL altitude was used
    pub agl_fallback: bool,
}

/// Altitude chosen for one record and the mode it is expressed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAltitude {
    pub meters: f64,
    pub mode: AltitudeMode,
    pub fell_back: bool,
}

/// Parse a single waypoint record
pub fn parse_waypoint_record(
    record: &StringRecord,
    settings: &ParserSettings,
) -> Result<ParsedWaypoint> {
    if record.len() < input_columns::REQUIRED {
        return Err(Error::missing_columns(record.len(), input_columns::REQUIRED));
    }

    let mut waypoint = Waypoint::with_defaults(&settings.defaults);

    let longitude = parse_real(get_field(record, input_columns::LONGITUDE)?, -180.0, 180.0)?;
    let latitude = parse_real(get_field(record, input_columns::LATITUDE)?, -90.0, 90.0)?;
    let altitude = resolve_altitude(record, settings)?;

    waypoint.position = GeoPoint::new(latitude, longitude, altitude.meters)?;
    waypoint.altitude_mode = altitude.mode;

    Ok(ParsedWaypoint {
        waypoint,
        agl_fallback: altitude.fell_back,
    })
}

/// Pick and validate the altitude column for a record
///
/// ASL mode reads the ASL column with no upper bound. AGL mode reads the AGL
/// column capped at the configured ceiling; when that cell is missing the
/// record's ASL altitude is used instead, under the same ceiling, and only
/// this waypoint becomes absolute.
pub fn resolve_altitude(
    record: &StringRecord,
    settings: &ParserSettings,
) -> Result<ResolvedAltitude> {
    match settings.defaults.altitude_mode {
        AltitudeMode::Absolute => Ok(ResolvedAltitude {
            meters: parse_asl(record, f64::MAX)?,
            mode: AltitudeMode::Absolute,
            fell_back: false,
        }),
        AltitudeMode::Relative => {
            let agl = get_field(record, input_columns::ALTITUDE_AGL)?;

            if is_missing_value(agl) {
                let meters = parse_asl(record, settings.max_altitude_agl)?;
                warn!(
                    waypoint = record.get(input_columns::WAYPOINT).unwrap_or_default(),
                    asl = meters,
                    "AGL altitude is missing, falling back to ASL and absolute mode"
                );
                return Ok(ResolvedAltitude {
                    meters,
                    mode: AltitudeMode::Absolute,
                    fell_back: true,
                });
            }

            let meters = parse_real(agl, 0.0, settings.max_altitude_agl)?;
            Ok(ResolvedAltitude {
                meters,
                mode: AltitudeMode::Relative,
                fell_back: false,
            })
        }
    }
}

fn parse_asl(record: &StringRecord, max: f64) -> Result<f64> {
    parse_real(get_field(record, input_columns::ALTITUDE_ASL)?, 0.0, max)
}
