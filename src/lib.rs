//! Flight Planner to Litchi Mission converter
//!
//! A Rust library for converting drone survey waypoints exported by a
//! flight-planning tool into missions for the Litchi flight app.
//!
//! This library provides tools for:
//! - Parsing Flight Planner CSV exports with per-line error recovery
//! - Resolving altitude references, including the AGL-to-ASL fallback
//! - Computing compass headings between consecutive waypoints
//! - Writing Litchi Mission Hub CSV, KML and KMZ documents
//! - Planning regular-polygon orbits
//!
//! # Example
//!
//! ```rust
//! use fp2lm::{ConverterOptions, MissionConverter, OutputFormat};
//!
//! # fn example() -> fp2lm::Result<()> {
//! let converter = MissionConverter::new(ConverterOptions::default())?;
//! let mut mission = Vec::new();
//! converter.process(
//!     "1,0,0,310.5,45.0,-89.4012,43.0731\n".as_bytes(),
//!     &mut mission,
//!     OutputFormat::Csv,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod units;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Action, AltitudeMode, GeoPoint, Waypoint};
pub use app::services::converter::{ConversionStats, MissionConverter};
pub use app::services::mission_writer::{MissionSerializer, OutputFormat};
pub use config::{Config, ConverterOptions};
pub use error::{Error, Result};
pub use units::{Feet, Meters};
