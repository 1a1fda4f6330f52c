/*!
 * Timed word transcripts.
 *
 * Words come from an upstream transcription/alignment step as JSON, either as a
 * bare array or wrapped in an object with a `words` field.
 */

use std::path::Path;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::errors::TranscriptError;

/// A single transcribed word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Word text as spoken
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,
}

impl Word {
    /// Creates a new word
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Start time in milliseconds, truncated toward zero
    pub fn start_ms(&self) -> i64 {
        seconds_to_ms(self.start)
    }

    /// End time in milliseconds, truncated toward zero
    pub fn end_ms(&self) -> i64 {
        seconds_to_ms(self.end)
    }
}

// @converts: Seconds to whole milliseconds
fn seconds_to_ms(seconds: f64) -> i64 {
    (seconds * 1000.0) as i64
}

// The two shapes the transcription backend produces
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptShape {
    Bare(Vec<Word>),
    Wrapped { words: Vec<Word> },
}

/// Parse a transcript from JSON text
pub fn parse_transcript(json: &str) -> Result<Vec<Word>, TranscriptError> {
    let words = match serde_json::from_str::<TranscriptShape>(json)? {
        TranscriptShape::Bare(words) => words,
        TranscriptShape::Wrapped { words } => words,
    };
    debug!("Parsed transcript with {} words", words.len());
    Ok(words)
}

/// Load a transcript from a JSON file
pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, TranscriptError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_transcript(&content)
}
