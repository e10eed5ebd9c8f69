//! Distance newtypes and unit-suffixed distance parsing.
//!
//! Photo intervals reach the converter already normalized to meters; this
//! module is where "20m" or "60ft" from the command line becomes a [`Meters`].

use crate::constants::METERS_PER_FOOT;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static DISTANCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-z]+)\s*$")
        .expect("distance pattern is valid")
});

/// Distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(f64);

impl Meters {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Distance in international feet.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Feet(pub f64);

impl Feet {
    /// Convert to meters.
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_FOOT)
    }
}

impl From<Feet> for Meters {
    fn from(feet: Feet) -> Self {
        feet.to_meters()
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ft", self.0)
    }
}

/// Parses "20m", "20 meters", "60ft", "60 Feet" into meters
impl FromStr for Meters {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let captures = DISTANCE_PATTERN.captures(s).ok_or_else(|| {
            Error::configuration(format!(
                "invalid distance '{}': expected a number followed by a unit (e.g. 20m or 60ft)",
                s
            ))
        })?;

        let value: f64 = captures[1]
            .parse()
            .map_err(|e| Error::parse(&captures[1], format!("{}", e)))?;

        if !value.is_finite() || value < 0.0 {
            return Err(Error::configuration(format!(
                "distance must be a non-negative number, got '{}'",
                s
            )));
        }

        match captures[2].to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Meters(value)),
            "ft" | "foot" | "feet" => Ok(Feet(value).to_meters()),
            _ => Err(Error::configuration(format!("invalid units in '{}'", s))),
        }
    }
}
