use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context, anyhow};
use log::{debug, warn};

use crate::file_utils::FileManager;
use crate::formats::{SubtitleConverter, SubtitleFormat};

// @module: Subtitle document and cue model

// @const: UTF-8 byte order mark
const UTF8_BOM: char = '\u{feff}';

// @struct: Single timed caption
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Display rows, top to bottom
    pub lines: Vec<String>,
}

impl Cue {
    pub fn new(start: f64, end: f64, lines: Vec<String>) -> Self {
        Cue { start, end, lines }
    }

    /// Creates a cue from newline separated text
    pub fn from_text(start: f64, end: f64, text: &str) -> Self {
        Cue::new(start, end, text.lines().map(str::to_string).collect())
    }

    /// Display duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Rows joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    // @checks: Cue lies within [from, till]
    fn is_within(&self, from: f64, till: Option<f64>) -> bool {
        self.start >= from && till.is_none_or(|till| self.end <= till)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:.3} --> {:.3}", self.start, self.end)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Subtitle document: an ordered cue list with its source
#[derive(Debug, Default)]
pub struct SubtitleCollection {
    /// Source filename, if loaded from disk
    pub source_file: Option<PathBuf>,

    /// Cues in start order
    pub cues: Vec<Cue>,
}

impl SubtitleCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from existing cues, sorted by start
    pub fn from_cues(cues: Vec<Cue>) -> Self {
        let mut collection = SubtitleCollection {
            source_file: None,
            cues,
        };
        collection.sort();
        collection
    }

    /// Parse subtitle text; the format is detected from the content when not given
    pub fn load_from_string(text: &str, format: Option<SubtitleFormat>) -> Result<Self> {
        let format = match format {
            Some(format) => format,
            None => SubtitleFormat::detect(text)
                .ok_or_else(|| anyhow!("Unable to detect subtitle format from content"))?,
        };

        let converter = format.converter();
        Self::load_with_converter(text, converter.as_ref())
    }

    /// Parse subtitle text with a specific converter
    pub fn load_with_converter(text: &str, converter: &dyn SubtitleConverter) -> Result<Self> {
        let input = normalize_input(text);
        let cues = converter.decode(&input)
            .context("Failed to decode subtitle content")?;

        let collection = SubtitleCollection {
            source_file: None,
            cues,
        };
        collection.warn_on_overlaps();
        Ok(collection)
    }

    /// Read and parse a subtitle file
    pub fn load_from_file<P: AsRef<Path>>(path: P, format: Option<SubtitleFormat>) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            return Err(anyhow!("Subtitle file does not exist: {}", path.display()));
        }

        let text = FileManager::read_to_string(path)?;
        let mut collection = Self::load_from_string(&text, format)
            .with_context(|| format!("Failed to load subtitles from {}", path.display()))?;
        collection.source_file = Some(path.to_path_buf());

        debug!("Loaded {} cues from {}", collection.cues.len(), path.display());
        Ok(collection)
    }

    /// Load a file and save it in another location/format
    pub fn convert<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2, format: Option<SubtitleFormat>) -> Result<()> {
        Self::load_from_file(from, None)?.save(to, format)?;
        Ok(())
    }

    /// Add a cue and keep the list ordered
    pub fn add(&mut self, start: f64, end: f64, lines: Vec<String>) -> &mut Self {
        self.cues.push(Cue::new(start, end, lines));
        self.sort();
        self
    }

    /// Drop cues whose start or end falls strictly inside (from, till)
    pub fn remove(&mut self, from: f64, till: f64) -> &mut Self {
        let before = self.cues.len();
        self.cues.retain(|cue| {
            let start_inside = from < cue.start && cue.start < till;
            let end_inside = from < cue.end && cue.end < till;
            !(start_inside || end_inside)
        });
        debug!("Removed {} cues between {:.3}s and {:.3}s", before - self.cues.len(), from, till);
        self
    }

    /// Keep only the cues between start and end
    pub fn trim(&mut self, start: f64, end: f64) -> &mut Self {
        self.remove(0.0, start);
        let max_time = self.max_time();
        self.remove(end, max_time);
        self
    }

    /// Shift cues that lie inside [from, till] by `seconds`; times never go below zero
    pub fn shift_time(&mut self, seconds: f64, from: f64, till: Option<f64>) -> &mut Self {
        for cue in self.cues.iter_mut().filter(|cue| cue.is_within(from, till)) {
            cue.start = (cue.start + seconds).max(0.0);
            cue.end = (cue.end + seconds).max(0.0);
        }
        self.sort();
        self
    }

    /// Stretch times inside [from, till]: no shift at `from`, growing linearly to
    /// `seconds` at `till`. `till` defaults to the latest end time.
    pub fn shift_time_gradually(&mut self, seconds: f64, from: f64, till: Option<f64>) -> &mut Self {
        let till = till.unwrap_or_else(|| self.max_time());
        if till <= from {
            debug!("Empty gradual shift window {:.3}s..{:.3}s", from, till);
            return self;
        }

        let shift = |time: f64| {
            if time < from || time > till {
                return time;
            }
            (time + seconds * (time - from) / (till - from)).max(0.0)
        };

        for cue in &mut self.cues {
            cue.start = shift(cue.start);
            cue.end = shift(cue.end);
        }
        self.sort();
        self
    }

    /// Latest end time of any cue
    pub fn max_time(&self) -> f64 {
        self.cues.iter().map(|cue| cue.end).fold(0.0, f64::max)
    }

    /// Encode the collection in the given format
    pub fn content(&self, format: SubtitleFormat) -> Result<String> {
        let converter = format.converter();
        self.content_with_converter(converter.as_ref())
    }

    /// Encode the collection with a specific converter
    pub fn content_with_converter(&self, converter: &dyn SubtitleConverter) -> Result<String> {
        converter.encode(&self.cues)
            .context("Failed to encode subtitles")
    }

    /// Write the collection; the format defaults to the path's extension
    pub fn save<P: AsRef<Path>>(&self, path: P, format: Option<SubtitleFormat>) -> Result<&Self> {
        let path = path.as_ref();
        let format = match format {
            Some(format) => format,
            None => format_for_path(path)?,
        };

        let content = self.content(format)?;
        FileManager::write_atomically(path, &content)?;
        Ok(self)
    }

    /// Write the collection with a specific converter
    pub fn save_with_converter<P: AsRef<Path>>(&self, path: P, converter: &dyn SubtitleConverter) -> Result<()> {
        let content = self.content_with_converter(converter)?;
        FileManager::write_atomically(path, &content)
    }

    // Stable, so cues starting together keep their order
    fn sort(&mut self) {
        self.cues.sort_by(|a, b| a.start.total_cmp(&b.start));
    }

    fn warn_on_overlaps(&self) {
        let overlap_count = self.cues.windows(2)
            .filter(|pair| pair[0].end > pair[1].start)
            .count();

        if overlap_count > 0 {
            warn!("Found {} overlapping subtitle cues", overlap_count);
        }
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        if let Some(source) = &self.source_file {
            writeln!(f, "Source: {:?}", source)?;
        }
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}

/// Format registered for a path's extension
pub fn format_for_path(path: &Path) -> Result<SubtitleFormat> {
    let extension = path.extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_default();

    SubtitleFormat::from_extension(&extension)
        .ok_or_else(|| anyhow!("No subtitle format for extension '{}' of {}", extension, path.display()))
}

// Strip a BOM and normalize line endings to \n
fn normalize_input(text: &str) -> String {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n")
}
