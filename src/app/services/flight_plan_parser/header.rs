//! Flight Planner header row detection
//!
//! Exports start with a column-name row such as
//! `Waypoint Number,X [m],Y [m],Alt. ASL [m],Alt. AGL [m],xcoord,ycoord`.
//! The exact wording varies between exporter versions, so the row is matched
//! on a few key columns instead of full equality.

use crate::constants::{HEADER_WAYPOINT_MARKER, HEADER_X_MARKER, HEADER_Y_MARKER, input_columns};
use csv::StringRecord;

/// Check whether a record is the exporter's own header row
pub fn is_header_record(record: &StringRecord) -> bool {
    match (
        record.get(input_columns::WAYPOINT),
        record.get(input_columns::GRID_X),
        record.get(input_columns::GRID_Y),
    ) {
        (Some(waypoint), Some(x), Some(y)) => {
            waypoint.contains(HEADER_WAYPOINT_MARKER)
                && x.contains(HEADER_X_MARKER)
                && y.contains(HEADER_Y_MARKER)
        }
        _ => false,
    }
}
