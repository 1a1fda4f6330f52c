/*!
 * Error types for the subfx application.
 *
 * The render engine itself never fails: malformed colours, unknown presets and
 * odd timings all degrade to defaults. These types cover the edges around it,
 * i.e. timestamp decoding, transcript loading and the CLI.
 */

use thiserror::Error;

/// Errors raised by the timestamp codec
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A timestamp was requested for a time before zero
    #[error("Negative time offset: {0} ms")]
    NegativeTime(i64),

    /// A timestamp string did not match `H:MM:SS.cc`
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),
}

/// Errors that can occur while loading a word transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The transcript JSON could not be decoded
    #[error("Failed to parse transcript: {0}")]
    Parse(#[from] serde_json::Error),

    /// The transcript file could not be read
    #[error("Failed to read transcript: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid application configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from transcript loading
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Error from the timestamp codec
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
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
