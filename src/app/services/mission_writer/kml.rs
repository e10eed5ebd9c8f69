//! KML serializer
//!
//! Produces a KML 2.2 document with one `Placemark` per waypoint, named by
//! its 1-based position in the mission.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;
use tracing::debug;

use super::MissionSerializer;
use crate::app::models::Waypoint;
use crate::constants::KML_NAMESPACE;
use crate::{Error, Result};

/// Writer for KML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct KmlWriter;

impl KmlWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole document into memory
    pub fn to_bytes(&self, waypoints: &[Waypoint]) -> Result<Vec<u8>> {
        let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

        emit(&mut w, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut kml = BytesStart::new("kml");
        kml.push_attribute(("xmlns", KML_NAMESPACE));
        emit(&mut w, Event::Start(kml))?;
        emit(&mut w, Event::Start(BytesStart::new("Document")))?;

        for (index, waypoint) in waypoints.iter().enumerate() {
            emit(&mut w, Event::Start(BytesStart::new("Placemark")))?;
            text_element(&mut w, "name", &(index + 1).to_string())?;

            emit(&mut w, Event::Start(BytesStart::new("Point")))?;
            text_element(&mut w, "coordinates", &coordinates(waypoint))?;
            emit(&mut w, Event::End(BytesEnd::new("Point")))?;

            emit(&mut w, Event::End(BytesEnd::new("Placemark")))?;
        }

        emit(&mut w, Event::End(BytesEnd::new("Document")))?;
        emit(&mut w, Event::End(BytesEnd::new("kml")))?;

        let mut data = w.into_inner();
        data.push(b'\n');
        Ok(data)
    }
}

/// KML coordinate tuple: longitude first
fn coordinates(waypoint: &Waypoint) -> String {
    format!(
        "{:.7},{:.7},{:.3}",
        waypoint.position.longitude(),
        waypoint.position.latitude(),
        waypoint.position.altitude()
    )
}

fn text_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    emit(w, Event::Start(BytesStart::new(name)))?;
    emit(w, Event::Text(BytesText::new(text)))?;
    emit(w, Event::End(BytesEnd::new(name)))
}

fn emit<W: Write>(w: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    w.write_event(event)
        .map_err(|e| Error::write_with_source("Failed to write KML element", e))
}

impl MissionSerializer for KmlWriter {
    fn write_mission(&self, waypoints: &[Waypoint], out: &mut dyn Write) -> Result<()> {
        let data = self.to_bytes(waypoints)?;
        out.write_all(&data)
            .and_then(|_| out.flush())
            .map_err(|e| Error::write_with_source("Failed to write KML document", e))?;

        debug!("Wrote {} waypoints as KML", waypoints.len());
        Ok(())
    }
}
