//! Application constants for the mission converter
//!
//! Column positions of the Flight Planner export, Litchi mission layout,
//! converter defaults and the numeric thresholds used by the bearing code.

// =============================================================================
// Flight Planner Input Layout
// =============================================================================

/// Fixed column positions in a Flight Planner waypoint export
pub mod input_columns {
    /// Waypoint number / label
    pub const WAYPOINT: usize = 0;

    /// Local grid X in meters (unused by the conversion)
    pub const GRID_X: usize = 1;

    /// Local grid Y in meters (unused by the conversion)
    pub const GRID_Y: usize = 2;

    /// Altitude above sea level in meters
    pub const ALTITUDE_ASL: usize = 3;

    /// Altitude above ground level in meters
    pub const ALTITUDE_AGL: usize = 4;

    /// Longitude (x coordinate) in decimal degrees
    pub const LONGITUDE: usize = 5;

    /// Latitude (y coordinate) in decimal degrees
    pub const LATITUDE: usize = 6;

    /// Minimum number of columns a data row must expose
    pub const REQUIRED: usize = 7;
}

/// Markers identifying the exporter's own header row, matched per column
pub const HEADER_WAYPOINT_MARKER: &str = "Waypoint";
pub const HEADER_X_MARKER: &str = "X";
pub const HEADER_Y_MARKER: &str = "Y";

/// Cell values treated as "no value" (compared case-insensitively)
pub const MISSING_VALUE_MARKERS: &[&str] = &["nan", "null", ""];

// =============================================================================
// Litchi Mission Layout
// =============================================================================

/// Maximum number of actions a Litchi waypoint can carry
pub const MAX_ACTIONS: usize = 15;

/// Litchi action codes
pub mod action_types {
    /// Padding action (no-op)
    pub const NONE: i8 = 0;

    /// Take a single photo
    pub const TAKE_PHOTO: i8 = 1;
}

/// Heading value of a waypoint whose heading has not been resolved yet
pub const HEADING_UNSET: f64 = 360.0;

/// Photo time interval value meaning "not used"
pub const PHOTO_INTERVAL_UNUSED: f64 = -1.0;

/// Fixed leading columns of the Litchi CSV header
pub const LITCHI_LEADING_COLUMNS: &[&str] = &[
    "latitude",
    "longitude",
    "altitude(m)",
    "heading(deg)",
    "curvesize(m)",
    "rotationdir",
    "gimbalmode",
    "gimbalpitchangle",
];

/// Fixed trailing columns of the Litchi CSV header
pub const LITCHI_TRAILING_COLUMNS: &[&str] = &[
    "altitudemode",
    "speed(m/s)",
    "poi_latitude",
    "poi_longitude",
    "poi_altitude(m)",
    "poi_altitudemode",
    "photo_timeinterval",
    "photo_distinterval",
];

/// Total Litchi CSV column count (8 leading + 15 action pairs + 8 trailing)
pub const LITCHI_COLUMN_COUNT: usize =
    LITCHI_LEADING_COLUMNS.len() + MAX_ACTIONS * 2 + LITCHI_TRAILING_COLUMNS.len();

/// Archive entry name holding the KML document inside a KMZ
pub const KMZ_DOCUMENT_NAME: &str = "doc.kml";

/// KML 2.2 namespace
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

// =============================================================================
// Converter Defaults
// =============================================================================

/// Default altitude reference ("agl" = relative to ground)
pub const DEFAULT_ALTITUDE_MODE: &str = "agl";

/// Default gimbal pitch: camera pointing straight down
pub const DEFAULT_GIMBAL_PITCH: f64 = -90.0;

/// Default maximum AGL altitude in meters (common regulatory ceiling, e.g. FAA/EASA)
pub const DEFAULT_MAX_ALTITUDE_AGL: f64 = 120.0;

/// Gimbal pitch bounds in degrees
pub const MIN_GIMBAL_PITCH: f64 = -90.0;
pub const MAX_GIMBAL_PITCH: f64 = 0.0;

/// Meters per international foot
pub const METERS_PER_FOOT: f64 = 0.3048;

// =============================================================================
// Bearing Thresholds
// =============================================================================

/// Latitude beyond which a point is treated as sitting on a pole
pub const POLE_LATITUDE: f64 = 89.5;

/// Latitude beyond which both points count as a high-latitude pair
pub const HIGH_LATITUDE: f64 = 89.0;

/// Tolerance around 180 degrees of longitude for high-latitude pairs
pub const HIGH_LATITUDE_LON_TOLERANCE: f64 = 10.0;

/// Tolerance for antipodal detection
pub const ANTIPODAL_EPSILON: f64 = 1e-6;

/// Below this magnitude both atan2 components are treated as zero
pub const DEGENERATE_EPSILON: f64 = 1e-10;

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "fp2lm";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "FP2LM_";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_litchi_column_count() {
        assert_eq!(LITCHI_COLUMN_COUNT, 46);
    }

    #[test]
    fn test_input_columns_fit_required_width() {
        assert!(input_columns::LATITUDE < input_columns::REQUIRED);
        assert!(input_columns::LONGITUDE < input_columns::REQUIRED);
        assert!(input_columns::ALTITUDE_AGL < input_columns::REQUIRED);
    }
}
