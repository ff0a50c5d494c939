/*!
 * Cue validation before Scenarist encoding.
 *
 * This module checks that cues are:
 * - Logically consistent (start <= end)
 * - Non-overlapping between cues
 * - Displayable in the four bottom caption rows after wrapping
 * - Made of characters the caption tables can represent
 */

use log::debug;

use crate::formats::scc::encoder::ROW_PREAMBLES;
use crate::formats::scc::tables;
use crate::formats::scc::wrap::{wrap_lines, MAX_LINE_LENGTH};
use crate::subtitle_processor::Cue;

/// Result of validating a single cue
#[derive(Debug, Clone)]
pub struct CueEntryResult {
    /// Position of the cue in the list
    pub index: usize,
    /// Whether the cue passed validation
    pub passed: bool,
    /// Issues found
    pub issues: Vec<CueIssue>,
}

impl CueEntryResult {
    /// Create a passing result
    pub fn passed(index: usize) -> Self {
        Self {
            index,
            passed: true,
            issues: vec![],
        }
    }

    /// Create a failing result
    pub fn failed(index: usize, issues: Vec<CueIssue>) -> Self {
        Self {
            index,
            passed: false,
            issues,
        }
    }
}

/// Types of cue issues
#[derive(Debug, Clone, PartialEq)]
pub enum CueIssue {
    /// End time is before start time
    InvalidTimeRange {
        start: f64,
        end: f64,
    },
    /// Overlaps with the previous cue
    OverlapsWithCue {
        other_index: usize,
        overlap: f64,
    },
    /// More rows than the screen area after wrapping
    TooManyRows {
        rows: usize,
        max_rows: usize,
    },
    /// Character will be written as the no-symbol placeholder
    UnencodableCharacter(char),
}

impl std::fmt::Display for CueIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CueIssue::InvalidTimeRange { start, end } => {
                write!(f, "Invalid time range: start {:.3}s > end {:.3}s", start, end)
            }
            CueIssue::OverlapsWithCue { other_index, overlap } => {
                write!(f, "Overlaps with cue {} by {:.3}s", other_index, overlap)
            }
            CueIssue::TooManyRows { rows, max_rows } => {
                write!(f, "Needs {} caption rows (max: {})", rows, max_rows)
            }
            CueIssue::UnencodableCharacter(c) => {
                write!(f, "Character '{}' cannot be encoded", c)
            }
        }
    }
}

/// Result of validating a cue list
#[derive(Debug, Clone)]
pub struct CueValidationResult {
    /// Overall pass/fail status
    pub passed: bool,
    /// Results for each cue
    pub entry_results: Vec<CueEntryResult>,
    /// Total number of issues
    pub total_issues: usize,
    /// Number of overlapping cues
    pub overlap_count: usize,
}

impl CueValidationResult {
    /// Get all failed cues
    pub fn failed_entries(&self) -> Vec<&CueEntryResult> {
        self.entry_results.iter().filter(|r| !r.passed).collect()
    }
}

/// Validator for cue lists
pub struct CueValidator {
    line_length: usize,
}

impl CueValidator {
    /// Create a validator for full-width caption rows
    pub fn new() -> Self {
        Self {
            line_length: MAX_LINE_LENGTH,
        }
    }

    /// Create a validator for a narrower row width
    pub fn with_line_length(line_length: usize) -> Self {
        Self { line_length }
    }

    /// Validate a single cue
    pub fn validate_cue(&self, index: usize, cue: &Cue) -> CueEntryResult {
        let mut issues = Vec::new();

        if cue.end < cue.start {
            issues.push(CueIssue::InvalidTimeRange {
                start: cue.start,
                end: cue.end,
            });
        }

        let rows = wrap_lines(&cue.lines, self.line_length).len();
        if rows > ROW_PREAMBLES.len() {
            issues.push(CueIssue::TooManyRows {
                rows,
                max_rows: ROW_PREAMBLES.len(),
            });
        }

        let mut reported = Vec::new();
        for c in cue.lines.iter().flat_map(|line| line.chars()) {
            if !tables::is_encodable(c) && !reported.contains(&c) {
                reported.push(c);
                issues.push(CueIssue::UnencodableCharacter(c));
            }
        }

        if issues.is_empty() {
            CueEntryResult::passed(index)
        } else {
            CueEntryResult::failed(index, issues)
        }
    }

    /// Validate a cue list in its given order
    pub fn validate_cues(&self, cues: &[Cue]) -> CueValidationResult {
        let mut entry_results: Vec<CueEntryResult> = cues
            .iter()
            .enumerate()
            .map(|(idx, cue)| self.validate_cue(idx, cue))
            .collect();

        let mut overlap_count = 0;
        for (idx, pair) in cues.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            if current.end > next.start {
                overlap_count += 1;
                // Add issue to the later cue
                if let Some(result) = entry_results.get_mut(idx + 1) {
                    result.issues.push(CueIssue::OverlapsWithCue {
                        other_index: idx,
                        overlap: current.end - next.start,
                    });
                    result.passed = false;
                }
            }
        }

        let total_issues: usize = entry_results.iter().map(|r| r.issues.len()).sum();
        let passed = entry_results.iter().all(|r| r.passed);

        debug!(
            "Cue validation: {} cues, {} issues, {} overlaps",
            cues.len(),
            total_issues,
            overlap_count
        );

        CueValidationResult {
            passed,
            entry_results,
            total_issues,
            overlap_count,
        }
    }
}

impl Default for CueValidator {
    fn default() -> Self {
        Self::new()
    }
}
