/*!
 * Subtitle format registry.
 *
 * Every format is reached through the `SubtitleConverter` trait so the
 * document layer never depends on a concrete codec. Scenarist (`.scc`) is the
 * only registered format.
 */

pub mod scc;

use std::fmt;
use std::str::FromStr;

use crate::errors::SubtitleError;
use crate::subtitle_processor::Cue;

pub use scc::SccConverter;

/// Conversion between file content and the cue list
pub trait SubtitleConverter {
    /// Whether the content is in this converter's format
    fn can_parse(&self, content: &str) -> bool;

    /// Decode file content into cues
    fn decode(&self, content: &str) -> Result<Vec<Cue>, SubtitleError>;

    /// Encode cues into file content
    fn encode(&self, cues: &[Cue]) -> Result<String, SubtitleError>;
}

/// Supported subtitle formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    // @format: Scenarist Closed Caption
    Scc,
}

impl SubtitleFormat {
    /// All registered formats, in detection order
    pub const ALL: [SubtitleFormat; 1] = [SubtitleFormat::Scc];

    // @returns: File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Scc => "scc",
        }
    }

    // @returns: Human readable format name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Scc => "Scenarist",
        }
    }

    /// Format registered for a file extension, case-insensitive
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// First format whose converter accepts the content
    pub fn detect(content: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.converter().can_parse(content))
    }

    /// Converter with default settings
    pub fn converter(&self) -> Box<dyn SubtitleConverter> {
        match self {
            Self::Scc => Box::new(SccConverter::new()),
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = SubtitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| SubtitleError::UnsupportedFormat(s.to_string()))
    }
}
