/*!
 * Broadcast timecode conversion (`HH:MM:SS:FF`).
 *
 * Times are carried as seconds (f64) everywhere else in the crate; this module
 * maps them to and from frame-numbered timecodes at an explicit frame rate.
 */

use std::fmt;

use crate::errors::SubtitleError;

/// NTSC broadcast rate used by Scenarist files
pub const NTSC_FRAME_RATE: f64 = 29.97;

// @struct: Frame-rate bound timecode converter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimecodeConverter {
    // @field: Frames per second
    frame_rate: f64,
}

impl TimecodeConverter {
    // @creates: Converter for a positive, finite frame rate
    pub fn new(frame_rate: f64) -> Result<Self, SubtitleError> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(SubtitleError::InvalidFrameRate(frame_rate));
        }
        Ok(Self { frame_rate })
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Highest frame number ever written, 29 at 29.97 fps
    pub fn max_frame(&self) -> u32 {
        (self.frame_rate.ceil() as u32).saturating_sub(1)
    }

    /// Parse `HH:MM:SS:FF` into seconds
    pub fn parse(&self, timecode: &str) -> Result<f64, SubtitleError> {
        let parts: Vec<&str> = timecode.trim().split(':').collect();
        if parts.len() != 4 {
            return Err(SubtitleError::InvalidTimecode(format!(
                "expected HH:MM:SS:FF, got '{}'",
                timecode
            )));
        }

        let mut fields = [0u32; 4];
        for (field, part) in fields.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(SubtitleError::InvalidTimecode(format!(
                    "non-numeric field '{}' in '{}'",
                    part, timecode
                )));
            }
            *field = part.parse().map_err(|_| {
                SubtitleError::InvalidTimecode(format!("field '{}' out of range in '{}'", part, timecode))
            })?;
        }

        let [hours, minutes, seconds, frames] = fields;
        Ok(f64::from(hours) * 3600.0
            + f64::from(minutes) * 60.0
            + f64::from(seconds)
            + f64::from(frames) / self.frame_rate)
    }

    /// Format seconds as `HH:MM:SS:FF`.
    ///
    /// Hours wrap at 24. The frame is the rounded fractional second, clamped to
    /// [`max_frame`](Self::max_frame): a fraction that rounds up to a whole second
    /// stays on the last frame of the current second instead of carrying over.
    pub fn format(&self, seconds: f64) -> String {
        Timecode::from_seconds(seconds, self).to_string()
    }

    /// Distance between two times in frames
    pub fn frames_between(&self, from: f64, to: f64) -> f64 {
        (to - from) * self.frame_rate
    }
}

impl Default for TimecodeConverter {
    fn default() -> Self {
        Self {
            frame_rate: NTSC_FRAME_RATE,
        }
    }
}

/// A split `HH:MM:SS:FF` timecode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Timecode {
    fn from_seconds(seconds: f64, converter: &TimecodeConverter) -> Self {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        let whole = seconds.trunc();
        let fraction = seconds - whole;
        let frames = ((fraction * converter.frame_rate).round() as u32).min(converter.max_frame());

        let whole = whole as u64;
        Self {
            hours: ((whole / 3600) % 24) as u32,
            minutes: ((whole % 3600) / 60) as u32,
            seconds: (whole % 60) as u32,
            frames,
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}
