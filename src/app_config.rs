use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::formats::scc::{DEFAULT_CUE_DURATION, MAX_LINE_LENGTH, NTSC_FRAME_RATE};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Scenarist codec settings
    #[serde(default)]
    pub scc: SccConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Scenarist codec configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SccConfig {
    // @field: Frames per second used for timecodes
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,

    // @field: Columns per caption row
    #[serde(default = "default_line_length")]
    pub line_length: usize,

    // @field: Duration of a final cue with no closing record
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: f64,
}

impl Default for SccConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            line_length: default_line_length(),
            default_duration_secs: default_duration_secs(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Suffix inserted before the extension of converted files
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Whether existing output files are overwritten
    #[serde(default)]
    pub force_overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            force_overwrite: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_frame_rate() -> f64 {
    NTSC_FRAME_RATE
}

fn default_line_length() -> usize {
    MAX_LINE_LENGTH
}

fn default_duration_secs() -> f64 {
    DEFAULT_CUE_DURATION
}

fn default_suffix() -> String {
    "converted".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.scc.frame_rate.is_finite() || self.scc.frame_rate <= 0.0 {
            return Err(anyhow!("Frame rate must be a positive number, got {}", self.scc.frame_rate));
        }

        if self.scc.line_length == 0 || self.scc.line_length > MAX_LINE_LENGTH {
            return Err(anyhow!(
                "Line length must be between 1 and {}, got {}",
                MAX_LINE_LENGTH,
                self.scc.line_length
            ));
        }

        if !self.scc.default_duration_secs.is_finite() || self.scc.default_duration_secs <= 0.0 {
            return Err(anyhow!(
                "Default cue duration must be a positive number, got {}",
                self.scc.default_duration_secs
            ));
        }

        if self.output.suffix.contains(['/', '\\']) {
            return Err(anyhow!("Output suffix must not contain path separators: {}", self.output.suffix));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("Config file not found at '{}', using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            scc: SccConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
