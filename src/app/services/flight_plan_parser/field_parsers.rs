//! Field parsing utilities for Flight Planner records
//!
//! This module provides helper functions for parsing numeric cells with
//! missing-value detection and inclusive range validation.

use crate::constants::MISSING_VALUE_MARKERS;
use crate::{Error, Result};
use csv::StringRecord;

/// Numeric representation requested from a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Double precision float
    Real,
    /// Single precision float; values are rounded to f32
    Single,
    /// Small signed integer (i8)
    SmallInt,
}

/// A successfully parsed field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Real(f64),
    Single(f32),
    SmallInt(i8),
}

impl FieldValue {
    /// The value widened to f64
    pub fn as_f64(&self) -> f64 {
        match *self {
            FieldValue::Real(v) => v,
            FieldValue::Single(v) => v as f64,
            FieldValue::SmallInt(v) => v as f64,
        }
    }
}

/// Check whether a cell holds a NaN/null/empty marker
pub fn is_missing_value(field: &str) -> bool {
    let trimmed = field.trim();
    MISSING_VALUE_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

/// Parse a field into the requested kind and validate it against `[min, max]`
pub fn parse_field(field: &str, kind: FieldKind, min: f64, max: f64) -> Result<FieldValue> {
    match kind {
        FieldKind::Real => parse_real(field, min, max).map(FieldValue::Real),
        FieldKind::Single => parse_single(field, min, max).map(FieldValue::Single),
        FieldKind::SmallInt => parse_small_int(field, min, max).map(FieldValue::SmallInt),
    }
}

/// Parse a double precision field within `[min, max]`
pub fn parse_real(field: &str, min: f64, max: f64) -> Result<f64> {
    let value_str = non_missing(field)?;

    let value = value_str
        .parse::<f64>()
        .map_err(|e| Error::parse(value_str, format!("{}", e)))?;

    // Signed spellings such as "-nan" get past the marker check
    if value.is_nan() {
        return Err(Error::invalid_value(value_str));
    }

    ensure_in_range(value, min, max)?;
    Ok(value)
}

/// Parse a single precision field within `[min, max]`
///
/// The value is rounded to f32 before the range check, so callers never
/// observe precision an f32 cannot hold.
pub fn parse_single(field: &str, min: f64, max: f64) -> Result<f32> {
    let value_str = non_missing(field)?;

    let value = value_str
        .parse::<f32>()
        .map_err(|e| Error::parse(value_str, format!("{}", e)))?;

    if value.is_nan() {
        return Err(Error::invalid_value(value_str));
    }

    ensure_in_range(value as f64, min, max)?;
    Ok(value)
}

/// Parse a small integer field within `[min, max]` and the i8 range
pub fn parse_small_int(field: &str, min: f64, max: f64) -> Result<i8> {
    let value_str = non_missing(field)?;

    let value = value_str
        .parse::<i64>()
        .map_err(|e| Error::parse(value_str, format!("{}", e)))?;

    ensure_in_range(value as f64, min, max)?;

    i8::try_from(value)
        .map_err(|_| Error::out_of_range(value as f64, i8::MIN as f64, i8::MAX as f64))
}

/// Get a cell from a record by position
pub fn get_field(record: &StringRecord, index: usize) -> Result<&str> {
    record
        .get(index)
        .ok_or_else(|| Error::missing_columns(record.len(), index + 1))
}

fn non_missing(field: &str) -> Result<&str> {
    if is_missing_value(field) {
        return Err(Error::invalid_value(field));
    }
    Ok(field.trim())
}

fn ensure_in_range(value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max {
        return Err(Error::out_of_range(value, min, max));
    }
    Ok(())
}
