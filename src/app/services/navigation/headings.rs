//! Heading post-pass over a finished waypoint sequence

use tracing::debug;

use crate::app::models::Waypoint;

/// Point every waypoint at its successor
///
/// Each waypoint except the last gets the bearing toward the next one. The
/// last waypoint repeats the heading of the one before it, so the aircraft
/// keeps facing the direction it arrived from. Sequences shorter than two
/// keep their unset (360) headings.
pub fn resolve_headings(waypoints: &mut [Waypoint]) {
    let count = waypoints.len();
    if count < 2 {
        debug!("Fewer than two waypoints, headings left unset");
        return;
    }

    for i in 0..count - 1 {
        let next = waypoints[i + 1].position;
        waypoints[i].heading = waypoints[i].position.bearing_to(&next);
    }
    waypoints[count - 1].heading = waypoints[count - 2].heading;

    debug!("Resolved headings for {} waypoints", count);
}
