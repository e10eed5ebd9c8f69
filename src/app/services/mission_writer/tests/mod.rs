//! Test utilities for mission serializer testing

use super::MissionSerializer;
use crate::app::models::{AltitudeMode, GeoPoint, Waypoint};


/// Helper to create a converted-looking waypoint
pub fn sample_waypoint(lat: f64, lon: f64, alt: f64, heading: f64) -> Waypoint {
    Waypoint {
        position: GeoPoint::new(lat, lon, alt).unwrap(),
        heading,
        photo_distance_interval: 20.0,
        ..Waypoint::default()
    }
}

/// Helper to create a short three-waypoint mission
pub fn sample_mission() -> Vec<Waypoint> {
    let mut fallback = sample_waypoint(43.07355, -89.40058, 311.25, 270.0);
    fallback.altitude_mode = AltitudeMode::Absolute;

    vec![
        sample_waypoint(43.0731, -89.4012, 45.0, 90.0),
        sample_waypoint(43.0731, -89.40058, 46.5, 0.0),
        fallback,
    ]
}

/// Helper to serialize into a string
pub fn render(serializer: &dyn MissionSerializer, waypoints: &[Waypoint]) -> String {
    let mut out = Vec::new();
    serializer.write_mission(waypoints, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
