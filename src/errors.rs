/*!
 * Error types for the subconv library.
 *
 * This module contains custom error types for the codec and the application layer,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while decoding or encoding subtitle content
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A timecode field is malformed (wrong field count or non-numeric)
    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    /// A cue needs more caption rows than the screen provides
    #[error("Cue at {start:.3}s needs {count} rows, at most {max} can be displayed")]
    TooManyLines {
        /// Start time of the offending cue in seconds
        start: f64,
        /// Number of rows after wrapping
        count: usize,
        /// Number of rows available
        max: usize,
    },

    /// No converter is registered for the requested format
    #[error("Unsupported subtitle format: {0}")]
    UnsupportedFormat(String),

    /// Frame rate is not a positive finite number
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f64),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
