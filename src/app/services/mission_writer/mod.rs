//! Mission serializers for converted waypoint sequences
//!
//! Every output format implements [`MissionSerializer`], which takes the
//! finished waypoint slice and writes one complete document to any
//! [`Write`] sink. [`OutputFormat`] selects the serializer at runtime.
//!
//! ## Formats
//!
//! - [`litchi_csv`] - Litchi Mission Hub CSV (46 columns per waypoint)
//! - [`kml`] - KML 2.2 document with one placemark per waypoint
//! - [`kmz`] - Zip archive holding the KML document as `doc.kml`
//!
//! ## Usage
//!
//! ```rust
//! use fp2lm::app::models::Waypoint;
//! use fp2lm::app::services::mission_writer::OutputFormat;
//!
//! # fn example() -> fp2lm::Result<()> {
//! let waypoints = vec![Waypoint::default()];
//! let mut out = Vec::new();
//! OutputFormat::Kml.serializer().write_mission(&waypoints, &mut out)?;
//!
//! assert!(String::from_utf8_lossy(&out).contains("<Placemark>"));
//! # Ok(())
//! # }
//! ```

pub mod kml;
pub mod kmz;
pub mod litchi_csv;

#[cfg(test)]
pub mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::app::models::Waypoint;
use crate::{Error, Result};

pub use kml::KmlWriter;
pub use kmz::KmzWriter;
pub use litchi_csv::LitchiCsvWriter;

/// Writes a complete mission document for a waypoint sequence
pub trait MissionSerializer {
    /// Serialize `waypoints` in order to `out`
    fn write_mission(&self, waypoints: &[Waypoint], out: &mut dyn Write) -> Result<()>;
}

/// Supported mission output formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Litchi Mission Hub CSV
    #[default]
    Csv,
    /// KML document
    Kml,
    /// Zipped KML document
    Kmz,
}

impl OutputFormat {
    /// Serializer implementing this format
    pub fn serializer(&self) -> Box<dyn MissionSerializer> {
        match self {
            OutputFormat::Csv => Box::new(LitchiCsvWriter::new()),
            OutputFormat::Kml => Box::new(KmlWriter::new()),
            OutputFormat::Kmz => Box::new(KmzWriter::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Kml => "kml",
            OutputFormat::Kmz => "kmz",
        }
    }

    /// Conventional file extension for this format
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Format implied by a file name's extension, if any
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        extension.parse().ok()
    }

    /// Whether the format produces binary output unsuitable for a terminal
    pub fn is_binary(&self) -> bool {
        matches!(self, OutputFormat::Kmz)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" | "litchi" => Ok(OutputFormat::Csv),
            "kml" => Ok(OutputFormat::Kml),
            "kmz" => Ok(OutputFormat::Kmz),
            other => Err(Error::configuration(format!(
                "Unknown output format '{}', expected csv, kml or kmz",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
