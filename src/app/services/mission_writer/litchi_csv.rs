//! Litchi Mission Hub CSV serializer
//!
//! One header row followed by one row per waypoint. Rows always carry
//! exactly 15 action pairs: shorter action lists are padded with no-op
//! actions and longer ones are truncated.

use std::io::Write;
use tracing::{debug, warn};

use super::MissionSerializer;
use crate::app::models::{Action, Waypoint};
use crate::constants::{LITCHI_COLUMN_COUNT, LITCHI_LEADING_COLUMNS, LITCHI_TRAILING_COLUMNS, MAX_ACTIONS};
use crate::{Error, Result};

/// Writer for Litchi Mission Hub CSV files
#[derive(Debug, Clone, Copy, Default)]
pub struct LitchiCsvWriter;

impl LitchiCsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Full Litchi header, action columns included
    pub fn header() -> Vec<String> {
        let mut header: Vec<String> = LITCHI_LEADING_COLUMNS.iter().map(|c| c.to_string()).collect();
        for n in 1..=MAX_ACTIONS {
            header.push(format!("actiontype{}", n));
            header.push(format!("actionparam{}", n));
        }
        header.extend(LITCHI_TRAILING_COLUMNS.iter().map(|c| c.to_string()));
        header
    }

    /// Format one waypoint as a Litchi row
    pub fn format_row(waypoint: &Waypoint) -> Vec<String> {
        let mut row = Vec::with_capacity(LITCHI_COLUMN_COUNT);

        row.push(format!("{:.7}", waypoint.position.latitude()));
        row.push(format!("{:.7}", waypoint.position.longitude()));
        row.push(format!("{:.3}", waypoint.position.altitude()));
        row.push(format!("{:.1}", waypoint.heading));
        row.push(format!("{:.1}", waypoint.curve_size));
        row.push(waypoint.rotation_direction.to_string());
        row.push(waypoint.gimbal_mode.to_string());
        row.push(format!("{:.1}", waypoint.gimbal_pitch));

        for action in padded_actions(waypoint) {
            row.push(action.action_type.to_string());
            row.push(action.param.to_string());
        }

        row.push(waypoint.altitude_mode.code().to_string());
        row.push(format!("{:.1}", waypoint.speed));
        row.push(format!("{:.7}", waypoint.poi.latitude()));
        row.push(format!("{:.7}", waypoint.poi.longitude()));
        row.push(format!("{:.3}", waypoint.poi.altitude()));
        row.push(waypoint.poi_altitude_mode.code().to_string());
        row.push(format!("{:.1}", waypoint.photo_time_interval));
        row.push(format!("{:.1}", waypoint.photo_distance_interval));

        row
    }
}

/// Exactly [`MAX_ACTIONS`] actions: padded with no-ops or truncated
fn padded_actions(waypoint: &Waypoint) -> Vec<Action> {
    if waypoint.actions.len() > MAX_ACTIONS {
        warn!(
            latitude = waypoint.position.latitude(),
            longitude = waypoint.position.longitude(),
            actions = waypoint.actions.len(),
            "Truncated excess actions for waypoint"
        );
    }

    let mut actions: Vec<Action> = waypoint.actions.iter().take(MAX_ACTIONS).copied().collect();
    actions.resize(MAX_ACTIONS, Action::none());
    actions
}

impl MissionSerializer for LitchiCsvWriter {
    fn write_mission(&self, waypoints: &[Waypoint], out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);

        writer
            .write_record(Self::header())
            .map_err(|e| Error::write_with_source("Failed to write Litchi header", e))?;

        for (index, waypoint) in waypoints.iter().enumerate() {
            writer.write_record(Self::format_row(waypoint)).map_err(|e| {
                Error::write_with_source(format!("Failed to write waypoint {}", index + 1), e)
            })?;
        }

        writer
            .flush()
            .map_err(|e| Error::write_with_source("Failed to flush Litchi CSV", e))?;

        debug!("Wrote {} waypoints as Litchi CSV", waypoints.len());
        Ok(())
    }
}
