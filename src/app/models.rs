//! Data models for mission conversion
//!
//! This module contains the waypoint representation shared by the parser,
//! the heading post-pass and every output serializer, following the column
//! layout of a Litchi Mission Hub waypoint.

use crate::constants::{self, action_types};
use crate::units::Meters;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Geographic Point
// =============================================================================

/// A position in WGS84 decimal degrees with altitude in meters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting coordinates outside their physical ranges
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        check_range(latitude, -90.0, 90.0)?;
        check_range(longitude, -180.0, 180.0)?;
        check_range(altitude, 0.0, f64::MAX)?;

        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Initial great-circle bearing from this point toward `other`
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        crate::app::services::navigation::bearing(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

fn check_range(value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Error::out_of_range(value, min, max));
    }
    Ok(())
}

// =============================================================================
// Altitude Mode
// =============================================================================

/// How a waypoint altitude is referenced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AltitudeMode {
    /// Above sea level (ASL)
    #[default]
    Absolute,
    /// Above ground level (AGL)
    Relative,
}

impl AltitudeMode {
    /// Integer code used in the Litchi CSV `altitudemode` column
    pub fn code(&self) -> u8 {
        match self {
            AltitudeMode::Absolute => 0,
            AltitudeMode::Relative => 1,
        }
    }

    /// Short option name ("asl" / "agl")
    pub fn as_str(&self) -> &'static str {
        match self {
            AltitudeMode::Absolute => "asl",
            AltitudeMode::Relative => "agl",
        }
    }
}

impl FromStr for AltitudeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asl" => Ok(AltitudeMode::Absolute),
            "agl" => Ok(AltitudeMode::Relative),
            _ => Err(Error::configuration(format!(
                "altitude mode must be either 'asl' or 'agl', got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for AltitudeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Actions
// =============================================================================

/// An action performed on arrival at a waypoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action_type: i8,
    /// Litchi parameters reach past the i8 range: stay time in milliseconds,
    /// rotation in degrees up to 360
    pub param: i16,
}

impl Action {
    pub fn new(action_type: i8, param: i16) -> Self {
        Self { action_type, param }
    }

    /// The single photo action every converted waypoint carries
    pub fn take_photo() -> Self {
        Self::new(action_types::TAKE_PHOTO, 0)
    }

    /// Zero action used to pad a waypoint to the full action count
    pub fn none() -> Self {
        Self::new(action_types::NONE, 0)
    }
}

// =============================================================================
// Waypoint
// =============================================================================

/// Values applied to every waypoint created during one conversion run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunDefaults {
    pub gimbal_pitch: f64,
    pub altitude_mode: AltitudeMode,
    pub photo_distance_interval: Meters,
}

/// One Litchi mission waypoint
///
/// Fields map one-to-one onto the Litchi CSV row. The point of interest is
/// carried for completeness but never populated by the Flight Planner
/// conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: GeoPoint,

    /// Degrees from true north; 360 until resolved by the heading pass
    pub heading: f64,

    pub curve_size: f64,
    pub rotation_direction: i8,
    pub gimbal_mode: i8,

    /// Camera tilt in degrees, -90 (down) to 0 (horizontal)
    pub gimbal_pitch: f64,

    pub altitude_mode: AltitudeMode,
    pub speed: f64,

    pub poi: GeoPoint,
    pub poi_altitude_mode: AltitudeMode,

    pub photo_time_interval: f64,
    pub photo_distance_interval: f64,

    pub actions: Vec<Action>,
}

impl Default for Waypoint {
    fn default() -> Self {
        Self {
            position: GeoPoint::default(),
            heading: constants::HEADING_UNSET,
            curve_size: 0.0,
            rotation_direction: 0,
            gimbal_mode: 0,
            gimbal_pitch: constants::DEFAULT_GIMBAL_PITCH,
            altitude_mode: AltitudeMode::Relative,
            speed: 0.0,
            poi: GeoPoint::default(),
            poi_altitude_mode: AltitudeMode::Absolute,
            photo_time_interval: constants::PHOTO_INTERVAL_UNUSED,
            photo_distance_interval: constants::PHOTO_INTERVAL_UNUSED,
            actions: vec![Action::take_photo()],
        }
    }
}

impl Waypoint {
    /// Create a waypoint carrying the run-wide defaults
    pub fn with_defaults(defaults: &RunDefaults) -> Self {
        Self {
            gimbal_pitch: defaults.gimbal_pitch,
            altitude_mode: defaults.altitude_mode,
            photo_distance_interval: defaults.photo_distance_interval.value(),
            ..Self::default()
        }
    }

    /// Whether the heading pass has assigned a heading
    pub fn has_heading(&self) -> bool {
        self.heading < constants::HEADING_UNSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_validation() {
        let point = GeoPoint::new(43.0731, -89.4012, 120.5).unwrap();
        assert_eq!(point.latitude(), 43.0731);
        assert_eq!(point.longitude(), -89.4012);
        assert_eq!(point.altitude(), 120.5);

        assert!(GeoPoint::new(90.0, 180.0, 0.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0, 0.0).is_ok());

        assert!(matches!(
            GeoPoint::new(90.1, 0.0, 0.0),
            Err(Error::OutOfRange { .. })
        ));
        assert!(GeoPoint::new(0.0, -180.5, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 0.0, -1.0).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_altitude_mode_parsing() {
        assert_eq!("agl".parse::<AltitudeMode>().unwrap(), AltitudeMode::Relative);
        assert_eq!("AGL".parse::<AltitudeMode>().unwrap(), AltitudeMode::Relative);
        assert_eq!("Asl".parse::<AltitudeMode>().unwrap(), AltitudeMode::Absolute);

        let err = "msl".parse::<AltitudeMode>().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_altitude_mode_codes() {
        assert_eq!(AltitudeMode::Absolute.code(), 0);
        assert_eq!(AltitudeMode::Relative.code(), 1);
        assert_eq!(AltitudeMode::Relative.to_string(), "agl");
    }

    #[test]
    fn test_waypoint_defaults() {
        let wp = Waypoint::default();

        assert_eq!(wp.position, GeoPoint::default());
        assert_eq!(wp.heading, 360.0);
        assert!(!wp.has_heading());
        assert_eq!(wp.curve_size, 0.0);
        assert_eq!(wp.rotation_direction, 0);
        assert_eq!(wp.gimbal_mode, 0);
        assert_eq!(wp.altitude_mode, AltitudeMode::Relative);
        assert_eq!(wp.poi, GeoPoint::default());
        assert_eq!(wp.poi_altitude_mode, AltitudeMode::Absolute);
        assert_eq!(wp.photo_time_interval, -1.0);
        assert_eq!(wp.actions, vec![Action::take_photo()]);
    }

    #[test]
    fn test_waypoint_with_run_defaults() {
        let defaults = RunDefaults {
            gimbal_pitch: -45.0,
            altitude_mode: AltitudeMode::Absolute,
            photo_distance_interval: Meters::new(20.0),
        };

        let wp = Waypoint::with_defaults(&defaults);
        assert_eq!(wp.gimbal_pitch, -45.0);
        assert_eq!(wp.altitude_mode, AltitudeMode::Absolute);
        assert_eq!(wp.photo_distance_interval, 20.0);
        assert_eq!(wp.photo_time_interval, -1.0);
        assert_eq!(wp.heading, 360.0);
        assert_eq!(wp.actions.len(), 1);
    }

    #[test]
    fn test_bearing_to() {
        let origin = GeoPoint::new(0.0, 0.0, 0.0).unwrap();
        let east = GeoPoint::new(0.0, 1.0, 0.0).unwrap();
        assert!((origin.bearing_to(&east) - 90.0).abs() < 1e-9);
    }
}
