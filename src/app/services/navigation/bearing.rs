//! Initial compass bearing between two geographic points
//!
//! The forward-azimuth formula breaks down at the poles, for antipodal pairs
//! and for coincident points. Those cases are handled explicitly, in a fixed
//! priority order, before the general formula runs.

use crate::constants::{
    ANTIPODAL_EPSILON, DEGENERATE_EPSILON, HIGH_LATITUDE, HIGH_LATITUDE_LON_TOLERANCE,
    POLE_LATITUDE,
};

/// Initial bearing in degrees clockwise from north, in `[0, 360)`
///
/// Inputs are decimal degrees. Special cases, first match wins:
///
/// 1. identical points return 0
/// 2. a start point within half a degree of the north pole returns 180, of the
///    south pole returns 0; two points above 89 degrees north roughly 180
///    degrees of longitude apart return 180
/// 3. antipodal points return 90 when heading to a larger longitude, else 270
/// 4. otherwise the forward azimuth, with a degenerate `atan2(0, 0)` mapped to 0
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    if let Some(bearing) = pole_bearing(lat1, lon1, lat2, lon2) {
        return bearing;
    }

    if is_antipodal(lat1, lon1, lat2, lon2) {
        return if lon2 > lon1 { 90.0 } else { 270.0 };
    }

    forward_azimuth(lat1, lon1, lat2, lon2)
}

fn pole_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Option<f64> {
    if lat1.abs() <= POLE_LATITUDE && lat2.abs() <= POLE_LATITUDE {
        return None;
    }

    if lat1 > POLE_LATITUDE {
        // Every direction away from the north pole is south
        return Some(180.0);
    }
    if lat1 < -POLE_LATITUDE {
        return Some(0.0);
    }

    if lat1 > HIGH_LATITUDE
        && lat2 > HIGH_LATITUDE
        && ((lon1 - lon2).abs() - 180.0).abs() < HIGH_LATITUDE_LON_TOLERANCE
    {
        return Some(180.0);
    }

    None
}

fn is_antipodal(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> bool {
    (lat1 + lat2).abs() < ANTIPODAL_EPSILON
        && ((lon1 - lon2).abs() - 180.0).abs() < ANTIPODAL_EPSILON
}

fn forward_azimuth(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();

    if x.abs() < DEGENERATE_EPSILON && y.abs() < DEGENERATE_EPSILON {
        return 0.0;
    }

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
