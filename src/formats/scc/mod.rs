/*!
 * Scenarist Closed Caption (`.scc`) codec.
 *
 * SCC files carry CEA-608 line-21 data as hex code words, one record per
 * timecode. This module converts between that stream and the cue list.
 *
 * # Architecture
 *
 * - `tables`: control, character, special and extended code tables
 * - `timecode`: `HH:MM:SS:FF` conversion at an explicit frame rate
 * - `wrap`: 32-column word wrapping
 * - `decoder`: record parsing and the record-to-cue fold
 * - `encoder`: pop-on caption generation
 */

pub mod tables;
pub mod timecode;
pub mod wrap;
pub mod decoder;
pub mod encoder;

use crate::app_config::SccConfig;
use crate::errors::SubtitleError;
use crate::formats::SubtitleConverter;
use crate::subtitle_processor::Cue;

pub use timecode::{TimecodeConverter, NTSC_FRAME_RATE};
pub use wrap::{wrap_lines, MAX_LINE_LENGTH};

/// First line of every Scenarist file
pub const SCC_HEADER: &str = "Scenarist_SCC V1.0";

/// Duration given to a final cue that no record closes
pub const DEFAULT_CUE_DURATION: f64 = 1.0;

/// Whether the text looks like a Scenarist file
pub fn is_scc(content: &str) -> bool {
    content.contains(SCC_HEADER)
}

// @struct: Scenarist converter
#[derive(Debug, Clone)]
pub struct SccConverter {
    timecodes: TimecodeConverter,
    line_length: usize,
    default_duration: f64,
}

impl SccConverter {
    /// Converter at 29.97 fps with 32 columns
    pub fn new() -> Self {
        Self {
            timecodes: TimecodeConverter::default(),
            line_length: MAX_LINE_LENGTH,
            default_duration: DEFAULT_CUE_DURATION,
        }
    }

    // @creates: Converter for a custom frame rate
    pub fn with_frame_rate(frame_rate: f64) -> Result<Self, SubtitleError> {
        Ok(Self {
            timecodes: TimecodeConverter::new(frame_rate)?,
            ..Self::new()
        })
    }

    // @creates: Converter from configuration values
    pub fn from_config(config: &SccConfig) -> Result<Self, SubtitleError> {
        Ok(Self {
            timecodes: TimecodeConverter::new(config.frame_rate)?,
            line_length: config.line_length.clamp(1, MAX_LINE_LENGTH),
            default_duration: config.default_duration_secs,
        })
    }

    pub fn timecodes(&self) -> &TimecodeConverter {
        &self.timecodes
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }
}

impl Default for SccConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtitleConverter for SccConverter {
    fn can_parse(&self, content: &str) -> bool {
        is_scc(content)
    }

    fn decode(&self, content: &str) -> Result<Vec<Cue>, SubtitleError> {
        decoder::decode(content, &self.timecodes, self.default_duration)
    }

    fn encode(&self, cues: &[Cue]) -> Result<String, SubtitleError> {
        encoder::encode(cues, &self.timecodes, self.line_length)
    }
}
