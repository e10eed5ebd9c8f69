//! Regular-polygon orbit planning
//!
//! An orbit around a subject is flown as a regular polygon. At vertex `i` of
//! an `n`-sided polygon the camera turns to `360 / n * i` degrees.

use serde::Serialize;
use std::fmt;

use crate::{Error, Result};

/// Minimum number of sides for a closed polygon
const MIN_SIDES: usize = 3;

/// A regular polygon with the camera bearing at each vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularPolygon {
    sides: usize,
    diameter: f64,
    camera_degrees: Vec<f64>,
}

impl RegularPolygon {
    /// Build a polygon, rejecting fewer than three sides or a non-positive diameter
    pub fn new(sides: usize, diameter: f64) -> Result<Self> {
        if sides < MIN_SIDES {
            return Err(Error::configuration(format!(
                "a polygon needs at least {} sides, got {}",
                MIN_SIDES, sides
            )));
        }
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(Error::configuration(format!(
                "polygon diameter must be a positive number, got {}",
                diameter
            )));
        }

        let step = 360.0 / sides as f64;
        let camera_degrees = (0..sides).map(|i| step * i as f64).collect();

        Ok(Self {
            sides,
            diameter,
            camera_degrees,
        })
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Camera bearing in degrees for each vertex, starting at 0
    pub fn camera_degrees(&self) -> &[f64] {
        &self.camera_degrees
    }

    /// Length of one side
    pub fn side_length(&self) -> f64 {
        self.diameter * (std::f64::consts::PI / self.sides as f64).sin()
    }
}

impl fmt::Display for RegularPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegularPolygon with {} sides and {:.2} diameter",
            self.sides, self.diameter
        )
    }
}
