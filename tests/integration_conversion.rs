//! Integration tests for end-to-end mission conversion
//!
//! These tests convert the Flight Planner fixture in `tests/data` through the
//! library API and through the `fp2lm` binary, and compare the Litchi output
//! against a golden file.

use fp2lm::app::services::converter::MissionConverter;
use fp2lm::app::services::mission_writer::OutputFormat;
use fp2lm::config::ConverterOptions;
use fp2lm::units::Meters;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn golden_options() -> ConverterOptions {
    ConverterOptions::default()
        .with_altitude_mode("agl")
        .with_gimbal_pitch(-90.0)
        .with_photo_interval(Meters::new(20.0))
        .with_max_altitude_agl(120.0)
}

/// Normalize line endings and surrounding whitespace for comparison
fn normalized_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn fp2lm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fp2lm"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run fp2lm binary")
}

/// Convert the fixture and compare with the golden Litchi CSV row by row
#[test]
fn test_golden_litchi_csv() {
    let input = std::fs::read_to_string(data_path("flight_plan.csv")).unwrap();
    let expected = std::fs::read_to_string(data_path("litchi_golden.csv")).unwrap();

    let converter = MissionConverter::new(golden_options()).unwrap();
    let mut output = Vec::new();
    let stats = converter
        .process(input.as_bytes(), &mut output, OutputFormat::Csv)
        .unwrap();

    let actual = normalized_lines(&String::from_utf8(output).unwrap());
    let expected = normalized_lines(&expected);

    assert_eq!(actual.len(), expected.len());
    for (index, (actual_row, expected_row)) in actual.iter().zip(&expected).enumerate() {
        assert_eq!(actual_row, expected_row, "row {} differs", index);
    }

    assert_eq!(stats.waypoints_written, 7);
    assert_eq!(stats.parse.header_rows, 1);
    assert_eq!(stats.parse.lines_skipped, 3);
    // Waypoint 4 falls back to an ASL altitude above the AGL ceiling
    assert!(stats.parse.errors[0].starts_with("Line 5:"));
    assert_eq!(stats.parse.agl_fallbacks, 0);
    assert_eq!(stats.absolute_waypoints, 0);
}

/// The KML and KMZ outputs describe the same waypoints as the CSV
#[test]
fn test_fixture_to_kml_and_kmz() {
    let input = std::fs::read_to_string(data_path("flight_plan.csv")).unwrap();
    let converter = MissionConverter::new(golden_options()).unwrap();

    let mut kml = Vec::new();
    converter
        .process(input.as_bytes(), &mut kml, OutputFormat::Kml)
        .unwrap();
    let kml = String::from_utf8(kml).unwrap();

    assert_eq!(kml.matches("<Placemark>").count(), 7);
    assert!(kml.contains("<coordinates>-89.4012310,43.0731120,45.200</coordinates>"));
    // Fallback altitude above the AGL ceiling never reaches the mission
    assert!(!kml.contains("315.200"));

    let mut kmz = Vec::new();
    converter
        .process(input.as_bytes(), &mut kmz, OutputFormat::Kmz)
        .unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(kmz)).unwrap();
    let mut document = String::new();
    archive
        .by_name("doc.kml")
        .unwrap()
        .read_to_string(&mut document)
        .unwrap();
    assert_eq!(document, kml);
}

#[test]
fn test_cli_convert_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("mission.csv");
    let input = data_path("flight_plan.csv");

    let result = fp2lm(&[
        "convert",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "-d",
        "20m",
        "--summary",
        "json",
    ]);
    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let actual = std::fs::read_to_string(&output_path).unwrap();
    let expected = std::fs::read_to_string(data_path("litchi_golden.csv")).unwrap();
    assert_eq!(normalized_lines(&actual), normalized_lines(&expected));

    // Stdout stays clean when writing to a file
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("\"waypoints_written\": 7"));
}

#[test]
fn test_cli_feet_distance_to_stdout() {
    let input = data_path("flight_plan.csv");
    let result = fp2lm(&["convert", input.to_str().unwrap(), "-d", "60ft", "-q"]);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    let rows = normalized_lines(&stdout);
    assert_eq!(rows.len(), 8);
    assert!(rows[1].ends_with(",-1.0,18.3"));
}

#[test]
fn test_cli_format_from_extension() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("mission.kmz");
    let input = data_path("flight_plan.csv");

    let result = fp2lm(&[
        "convert",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "-q",
    ]);
    assert!(result.status.success());

    let data = std::fs::read(&output_path).unwrap();
    assert_eq!(&data[..4], b"PK\x03\x04");
}

#[test]
fn test_cli_invalid_pitch_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("mission.csv");
    let input = data_path("flight_plan.csv");

    let result = fp2lm(&[
        "convert",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--pitch",
        "15",
    ]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output_path.exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("gimbal pitch"));
}

#[test]
fn test_cli_missing_input_fails() {
    let result = fp2lm(&["convert", "/nonexistent/flight_plan.csv"]);
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_cli_orbit() {
    let result = fp2lm(&["orbit", "4", "100"]);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.starts_with("RegularPolygon with 4 sides and 100.00 diameter"));
    assert!(stdout.contains("camera 270.00°"));

    let result = fp2lm(&["orbit", "2", "100"]);
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_cli_without_command_shows_help() {
    let result = fp2lm(&[]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("COMMANDS:"));
}
