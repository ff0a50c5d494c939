/*!
 * Scenarist stream encoding.
 *
 * Every cue becomes a pop-on caption: the non-displayed memory is cleared and
 * loaded row by row, then flipped on screen. A stop record erases the screen
 * at the cue end unless the next cue follows within one frame.
 */

use log::{debug, warn};

use super::tables::{self, CharacterCode, NO_SYMBOL, PADDING};
use super::timecode::TimecodeConverter;
use super::wrap::wrap_lines;
use super::SCC_HEADER;
use crate::errors::SubtitleError;
use crate::subtitle_processor::Cue;

/// Erase non-displayed memory, resume caption loading
const CAPTION_SETUP: &str = "94ae 94ae 9420 9420";

/// End of caption: swap memories so the loaded rows show
const END_OF_CAPTION: &str = "942f 942f";

/// Erase displayed memory
const ERASE_DISPLAY: &str = "942c 942c";

/// Row preambles, top to bottom, for the lowest four rows of the screen
pub const ROW_PREAMBLES: [&str; 4] = ["13d0", "1370", "94d0", "9470"];

/// Gap above which the screen is explicitly cleared between cues
const STOP_GAP_FRAMES: f64 = 1.0;

// absorbs float noise when the gap is exactly one frame
const GAP_TOLERANCE: f64 = 1e-9;

const RECORD_SEPARATOR: &str = "\r\n\r\n";

/// Encode cues into a complete Scenarist file
pub fn encode(
    cues: &[Cue],
    timecodes: &TimecodeConverter,
    line_length: usize,
) -> Result<String, SubtitleError> {
    let mut content = String::from(SCC_HEADER);
    content.push_str(RECORD_SEPARATOR);

    let mut stop_records = 0;
    for (idx, cue) in cues.iter().enumerate() {
        let next = cues.get(idx + 1);
        content.push_str(&caption_record(cue, timecodes, line_length)?);

        if needs_stop_record(cue, next, timecodes) {
            content.push_str(&format!("{}\t{}{}", timecodes.format(cue.end), ERASE_DISPLAY, RECORD_SEPARATOR));
            stop_records += 1;
        } else {
            debug!(
                "Cue at {:.3}s is followed within a frame, skipping stop record",
                cue.start
            );
        }
    }

    debug!("Encoded {} cues with {} stop records", cues.len(), stop_records);
    Ok(content)
}

/// Whether an erase record must follow `cue`
pub fn needs_stop_record(cue: &Cue, next: Option<&Cue>, timecodes: &TimecodeConverter) -> bool {
    match next {
        Some(next) => timecodes.frames_between(cue.end, next.start) > STOP_GAP_FRAMES + GAP_TOLERANCE,
        None => true,
    }
}

// Caption record for one cue, terminated by the record separator
fn caption_record(
    cue: &Cue,
    timecodes: &TimecodeConverter,
    line_length: usize,
) -> Result<String, SubtitleError> {
    let lines = wrap_lines(&cue.lines, line_length);
    let rows = row_preambles(lines.len()).ok_or(SubtitleError::TooManyLines {
        start: cue.start,
        count: lines.len(),
        max: ROW_PREAMBLES.len(),
    })?;

    let mut record = format!("{}\t{}", timecodes.format(cue.start), CAPTION_SETUP);
    for (line, row) in lines.iter().zip(rows) {
        // an empty row still gets its separator, leaving a double space
        record.push_str(&format!(" {} {} {}", row, row, encode_line(line)));
    }
    record.push(' ');
    record.push_str(END_OF_CAPTION);
    record.push_str(RECORD_SEPARATOR);

    Ok(record)
}

/// Preambles for `count` rows aligned to the bottom of the screen
pub fn row_preambles(count: usize) -> Option<&'static [&'static str]> {
    let first = ROW_PREAMBLES.len().checked_sub(count)?;
    Some(&ROW_PREAMBLES[first..])
}

/// Encode one caption row into space separated 4-digit code words
pub fn encode_line(line: &str) -> String {
    let mut digits = String::with_capacity(line.len() * 2 + 2);

    for c in line.chars() {
        match tables::encode_character(c) {
            Some(CharacterCode::Standard(code)) => digits.push_str(code),
            Some(CharacterCode::Wide(code)) => {
                // wide codes must start on a word boundary
                if digits.len() % 4 != 0 {
                    digits.push_str(PADDING);
                }
                digits.push_str(code);
            }
            None => {
                warn!("Character '{}' has no SCC code, writing '{}'", c, NO_SYMBOL);
                if let Some(CharacterCode::Standard(code)) = tables::encode_character(NO_SYMBOL) {
                    digits.push_str(code);
                }
            }
        }
    }

    if digits.len() % 4 != 0 {
        digits.push_str(PADDING);
    }

    group_words(&digits)
}

// "c1c2c380" -> "c1c2 c380"
fn group_words(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 4);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && idx % 4 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}
