//! Error handling for mission conversion.
//!
//! One error type covers the whole pipeline. Field-level variants
//! (`InvalidValue`, `Parse`, `OutOfRange`, `MissingColumns`, `Csv`) are
//! recovered by the parser, which skips the offending line. `Configuration`,
//! `Write` and `Io` end the run.

use thiserror::Error;

/// Result type alias for the converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mission conversion operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid run-wide option; the run aborts before any output
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Field holds a NaN/empty/null marker instead of a value
    #[error("Invalid value '{value}': field is NaN, null or empty")]
    InvalidValue { value: String },

    /// Field text is not a number of the requested kind
    #[error("Parse error for '{value}': {message}")]
    Parse { value: String, message: String },

    /// Parsed value lies outside the accepted range
    #[error("Value {value} out of range (min: {min}, max: {max})")]
    OutOfRange { value: f64, min: f64, max: f64 },

    /// Record is too short to hold the fixed input columns
    #[error("Record has {found} columns, at least {required} required")]
    MissingColumns { found: usize, required: usize },

    /// CSV record could not be read
    #[error("CSV parsing error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// A serializer failed to write the mission
    #[error("Write error: {message}")]
    Write {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(value: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
        }
    }

    /// Create a numeric parse error
    pub fn parse(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange { value, min, max }
    }

    /// Create a missing columns error
    pub fn missing_columns(found: usize, required: usize) -> Self {
        Self::MissingColumns { found, required }
    }

    /// Create a CSV error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a write error wrapping the underlying cause
    pub fn write_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Write {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether the parser may recover from this error by skipping the line
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue { .. }
                | Self::Parse { .. }
                | Self::OutOfRange { .. }
                | Self::MissingColumns { .. }
                | Self::Csv { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(Error::invalid_value("nan").is_recoverable());
        assert!(Error::parse("abc", "invalid float literal").is_recoverable());
        assert!(Error::out_of_range(200.0, 0.0, 100.0).is_recoverable());
        assert!(Error::missing_columns(5, 7).is_recoverable());

        assert!(!Error::configuration("bad mode").is_recoverable());
        assert!(
            !Error::write_with_source("disk full", std::io::Error::other("disk full"))
                .is_recoverable()
        );
        assert!(!Error::io_other("closed").is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::out_of_range(200.0, 0.0, 100.0);
        assert_eq!(err.to_string(), "Value 200 out of range (min: 0, max: 100)");

        let err = Error::missing_columns(5, 7);
        assert_eq!(err.to_string(), "Record has 5 columns, at least 7 required");

        let err = Error::configuration("altitude mode must be either 'asl' or 'agl'");
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    impl Error {
        fn io_other(message: &str) -> Self {
            Self::io(message, std::io::Error::other(message))
        }
    }
}
