/*!
 * Scenarist stream decoding.
 *
 * Records are `HH:MM:SS:FF<whitespace>CODE CODE ...` lines. Each record is
 * decoded into its caption rows, then the records are folded into cues: a
 * record with text opens a cue, and the next record of any kind closes it.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::tables::{self, NO_SYMBOL};
use super::timecode::TimecodeConverter;
use crate::errors::SubtitleError;
use crate::subtitle_processor::Cue;

// @const: Record line regex
static RECORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2})\s+(.*)$").unwrap()
});

/// One timed record of the stream
#[derive(Debug, Clone, PartialEq)]
pub struct SccRecord {
    /// Record time in seconds
    pub time: f64,
    /// Caption rows carried by the record; empty for control-only records
    pub lines: Vec<String>,
}

/// Decode a complete Scenarist file into cues.
///
/// The final cue, when nothing follows it, lasts `default_duration` seconds.
pub fn decode(
    content: &str,
    timecodes: &TimecodeConverter,
    default_duration: f64,
) -> Result<Vec<Cue>, SubtitleError> {
    let records = parse_records(content, timecodes)?;
    let record_count = records.len();

    let mut builder = CueBuilder::new(default_duration);
    for record in records {
        builder.push(record);
    }
    let cues = builder.finish();

    debug!("Decoded {} SCC records into {} cues", record_count, cues.len());
    Ok(cues)
}

/// Parse every record line; anything else in the file is ignored
pub fn parse_records(
    content: &str,
    timecodes: &TimecodeConverter,
) -> Result<Vec<SccRecord>, SubtitleError> {
    RECORD_REGEX
        .captures_iter(content)
        .map(|caps| {
            let time = timecodes.parse(&caps[1])?;
            Ok(SccRecord {
                time,
                lines: decode_payload(&caps[2]),
            })
        })
        .collect()
}

/// Decode a record payload into its non-blank caption rows
pub fn decode_payload(payload: &str) -> Vec<String> {
    let mut text = String::new();

    for word in payload.split_whitespace() {
        let code = word.to_ascii_lowercase();

        if let Some(command) = tables::command(&code) {
            if command.is_line_break() {
                text.push('\n');
            }
            continue;
        }

        if let Some(c) = tables::extended_character(&code).or_else(|| tables::special_character(&code)) {
            text.push(c);
            continue;
        }

        decode_character_pair(&code, &mut text);
    }

    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

// Two standard characters packed in one code word
fn decode_character_pair(code: &str, text: &mut String) {
    if code.len() != 4 || !code.is_ascii() {
        debug!("Malformed SCC code word '{}', substituting '{}'", code, NO_SYMBOL);
        text.push(NO_SYMBOL);
        return;
    }

    for half in [&code[..2], &code[2..]] {
        match tables::character(half) {
            Some(s) => text.push_str(s),
            None => {
                debug!("Unknown SCC code '{}' in '{}', substituting '{}'", half, code, NO_SYMBOL);
                text.push(NO_SYMBOL);
            }
        }
    }
}

// Cue being assembled from the record stream
enum FoldState {
    Idle,
    Open { start: f64, lines: Vec<String> },
}

// @struct: Record-to-cue fold
struct CueBuilder {
    state: FoldState,
    cues: Vec<Cue>,
    default_duration: f64,
}

impl CueBuilder {
    fn new(default_duration: f64) -> Self {
        Self {
            state: FoldState::Idle,
            cues: Vec::new(),
            default_duration,
        }
    }

    fn push(&mut self, record: SccRecord) {
        // any record ends the cue on screen
        if let FoldState::Open { start, lines } = std::mem::replace(&mut self.state, FoldState::Idle) {
            self.cues.push(Cue::new(start, record.time, lines));
        }

        if !record.lines.is_empty() {
            self.state = FoldState::Open {
                start: record.time,
                lines: record.lines,
            };
        }
    }

    fn finish(mut self) -> Vec<Cue> {
        if let FoldState::Open { start, lines } = self.state {
            self.cues.push(Cue::new(start, start + self.default_duration, lines));
        }
        self.cues
    }
}
