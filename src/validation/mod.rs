/*!
 * Validation of cue lists before encoding.
 *
 * - `cues`: timing, row count and character checks
 */

pub mod cues;

// Re-export main types
pub use cues::{CueIssue, CueValidationResult, CueValidator};
