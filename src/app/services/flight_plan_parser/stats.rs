//! Parsing statistics and result structures for Flight Planner input
//!
//! This module provides types for tracking how many lines became waypoints,
//! how many were skipped and why, and how often the AGL fallback kicked in.

use crate::app::models::Waypoint;

/// Parsing result with waypoints in file order and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed waypoints, in input order
    pub waypoints: Vec<Waypoint>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// Line-level parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of input lines read, blank lines included
    pub total_lines: usize,

    /// Number of exporter header rows skipped
    pub header_rows: usize,

    /// Number of waypoints successfully parsed
    pub waypoints_parsed: usize,

    /// Number of lines skipped due to errors
    pub lines_skipped: usize,

    /// Number of waypoints switched to absolute altitude because AGL was missing
    pub agl_fallbacks: usize,

    /// Skip reasons for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            header_rows: 0,
            waypoints_parsed: 0,
            lines_skipped: 0,
            agl_fallbacks: 0,
            errors: Vec::new(),
        }
    }

    /// Number of lines that were candidate data rows
    pub fn data_lines(&self) -> usize {
        self.waypoints_parsed + self.lines_skipped
    }

    /// Calculate success rate over candidate data rows as a percentage
    pub fn success_rate(&self) -> f64 {
        let data_lines = self.data_lines();
        if data_lines == 0 {
            0.0
        } else {
            (self.waypoints_parsed as f64 / data_lines as f64) * 100.0
        }
    }

    /// Check whether every data row became a waypoint
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0
    }

    /// Record a skipped line and its reason
    pub fn record_skip(&mut self, line_number: usize, reason: impl std::fmt::Display) {
        self.lines_skipped += 1;
        self.errors.push(format!("Line {}: {}", line_number, reason));
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
