//! Configuration management and validation.
//!
//! Provides the converter options consumed by one conversion run and the
//! application configuration around them, loaded in layers: built-in
//! defaults, then a TOML file, then `FP2LM_*` environment variables, then
//! command-line flags (applied by the CLI).

use crate::app::models::AltitudeMode;
use crate::app::services::mission_writer::OutputFormat;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ALTITUDE_MODE, DEFAULT_GIMBAL_PITCH,
    DEFAULT_MAX_ALTITUDE_AGL, ENV_PREFIX, MAX_GIMBAL_PITCH, MIN_GIMBAL_PITCH,
};
use crate::units::Meters;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Run-wide options for one conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// "agl" (relative to ground) or "asl" (absolute), case-insensitive
    pub altitude_mode: String,

    /// Distance between photos, already normalized to meters
    pub photo_interval: Meters,

    /// Camera tilt in degrees, between -90 and 0
    pub gimbal_pitch: f64,

    /// Highest AGL altitude accepted in AGL mode, in meters
    pub max_altitude_agl: f64,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            altitude_mode: DEFAULT_ALTITUDE_MODE.to_string(),
            photo_interval: Meters::new(0.0),
            gimbal_pitch: DEFAULT_GIMBAL_PITCH,
            max_altitude_agl: DEFAULT_MAX_ALTITUDE_AGL, // regulatory ceiling in many jurisdictions
        }
    }
}

impl ConverterOptions {
    /// Set the altitude mode string
    pub fn with_altitude_mode(mut self, mode: impl Into<String>) -> Self {
        self.altitude_mode = mode.into();
        self
    }

    /// Set the photo distance interval
    pub fn with_photo_interval(mut self, interval: Meters) -> Self {
        self.photo_interval = interval;
        self
    }

    /// Set the gimbal pitch
    pub fn with_gimbal_pitch(mut self, pitch: f64) -> Self {
        self.gimbal_pitch = pitch;
        self
    }

    /// Set the AGL ceiling
    pub fn with_max_altitude_agl(mut self, meters: f64) -> Self {
        self.max_altitude_agl = meters;
        self
    }

    /// Validate the options and resolve the altitude mode
    pub fn validate(&self) -> Result<AltitudeMode> {
        let mode = self.altitude_mode.parse::<AltitudeMode>()?;

        if !(MIN_GIMBAL_PITCH..=MAX_GIMBAL_PITCH).contains(&self.gimbal_pitch) {
            return Err(Error::configuration(format!(
                "gimbal pitch must be between -90 and 0 degrees, got {:.1}",
                self.gimbal_pitch
            )));
        }

        if !self.max_altitude_agl.is_finite() || self.max_altitude_agl < 0.0 {
            return Err(Error::configuration(format!(
                "maximum AGL altitude must be a non-negative number, got {}",
                self.max_altitude_agl
            )));
        }

        let interval = self.photo_interval.value();
        if !interval.is_finite() || interval < 0.0 {
            return Err(Error::configuration(format!(
                "photo interval must be a non-negative distance, got {}",
                self.photo_interval
            )));
        }

        Ok(mode)
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Mission container to produce
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub converter: ConverterOptions,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location: `<user config dir>/fp2lm/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid configuration file: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Load defaults, then a config file, then environment overrides
    ///
    /// Without an explicit path the default location is read when a file
    /// exists there.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Ok(path) if path.is_file() => {
                    debug!("Loading configuration from {}", path.display());
                    Self::from_file(&path)?
                }
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `FP2LM_*` overrides using the supplied variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(mode) = var("ALTITUDE_MODE") {
            self.converter.altitude_mode = mode;
        }
        if let Some(pitch) = var("GIMBAL_PITCH") {
            self.converter.gimbal_pitch = parse_env_number("GIMBAL_PITCH", &pitch)?;
        }
        if let Some(max_altitude) = var("MAX_ALTITUDE") {
            self.converter.max_altitude_agl = parse_env_number("MAX_ALTITUDE", &max_altitude)?;
        }
        if let Some(interval) = var("PHOTO_INTERVAL") {
            self.converter.photo_interval = interval.parse()?;
        }
        if let Some(format) = var("FORMAT") {
            self.output.format = format.parse()?;
        }

        Ok(())
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<()> {
        self.converter.validate()?;
        Ok(())
    }
}

fn parse_env_number(name: &str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        Error::configuration(format!(
            "{}{} must be a number, got '{}'",
            ENV_PREFIX, name, value
        ))
    })
}
