//! Command implementations for the fp2lm CLI
//!
//! Each command is implemented in its own module:
//! - `convert`: Flight Planner export to Litchi CSV, KML or KMZ
//! - `orbit`: Regular-polygon camera bearings

pub mod convert;
pub mod orbit;
pub mod shared;

use anyhow::Result;

use crate::cli::args::Commands;

/// Dispatch to the handler for `command`
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Convert(convert_args) => convert::run_convert(convert_args).map(|_| ()),
        Commands::Orbit(orbit_args) => orbit::run_orbit(orbit_args).map(|_| ()),
    }
}
