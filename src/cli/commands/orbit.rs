//! Orbit command implementation

use anyhow::{Context, Result};

use super::shared::setup_logging;
use crate::app::services::orbit::RegularPolygon;
use crate::cli::args::{OrbitArgs, SummaryFormat};

/// Run the orbit command, printing the polygon to stdout
pub fn run_orbit(args: OrbitArgs) -> Result<RegularPolygon> {
    setup_logging("warn", false)?;

    let polygon = RegularPolygon::new(args.sides, args.diameter)?;

    match args.output_format {
        SummaryFormat::Human => {
            println!("{}", polygon);
            for (vertex, degrees) in polygon.camera_degrees().iter().enumerate() {
                println!("  vertex {:>3}: camera {:.2}°", vertex + 1, degrees);
            }
        }
        SummaryFormat::Json => {
            let json =
                serde_json::to_string_pretty(&polygon).context("Failed to serialize polygon")?;
            println!("{}", json);
        }
    }

    Ok(polygon)
}
