//! KMZ serializer: a zip archive holding the KML document as `doc.kml`

use std::io::{Cursor, Write};
use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::MissionSerializer;
use super::kml::KmlWriter;
use crate::app::models::Waypoint;
use crate::constants::KMZ_DOCUMENT_NAME;
use crate::{Error, Result};

/// Writer for KMZ archives
#[derive(Debug, Clone, Copy, Default)]
pub struct KmzWriter {
    kml: KmlWriter,
}

impl KmzWriter {
    pub fn new() -> Self {
        Self {
            kml: KmlWriter::new(),
        }
    }

    /// Build the archive in memory
    pub fn to_bytes(&self, waypoints: &[Waypoint]) -> Result<Vec<u8>> {
        let document = self.kml.to_bytes(waypoints)?;

        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        archive
            .start_file(KMZ_DOCUMENT_NAME, SimpleFileOptions::default())
            .map_err(|e| Error::write_with_source("Failed to start KMZ entry", e))?;
        archive
            .write_all(&document)
            .map_err(|e| Error::write_with_source("Failed to write KMZ entry", e))?;
        let cursor = archive
            .finish()
            .map_err(|e| Error::write_with_source("Failed to finish KMZ archive", e))?;

        Ok(cursor.into_inner())
    }
}

impl MissionSerializer for KmzWriter {
    fn write_mission(&self, waypoints: &[Waypoint], out: &mut dyn Write) -> Result<()> {
        let data = self.to_bytes(waypoints)?;
        out.write_all(&data)
            .and_then(|_| out.flush())
            .map_err(|e| Error::write_with_source("Failed to write KMZ archive", e))?;

        debug!("Wrote {} waypoints as KMZ ({} bytes)", waypoints.len(), data.len());
        Ok(())
    }
}
