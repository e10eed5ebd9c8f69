//! Tests for exporter header row detection

use super::super::header::is_header_record;
use super::{SAMPLE_HEADER, record};

#[test]
fn test_detects_exporter_header() {
    assert!(is_header_record(&record(SAMPLE_HEADER)));
}

#[test]
fn test_detects_header_variants() {
    // Older exporter versions shorten the column names
    assert!(is_header_record(&record("Waypoint,X,Y,ASL,AGL,Lon,Lat")));
    assert!(is_header_record(&record("Waypoint Number,X [ft],Y [ft]")));
}

#[test]
fn test_data_rows_are_not_headers() {
    assert!(!is_header_record(&record(
        "1,0.0,0.0,310.5,45.0,-89.4012,43.0731"
    )));
    assert!(!is_header_record(&record("Waypoint Number,lat,lon,alt")));
}

#[test]
fn test_short_rows_are_not_headers() {
    assert!(!is_header_record(&record("Waypoint Number,X [m]")));
    assert!(!is_header_record(&record("")));
}
