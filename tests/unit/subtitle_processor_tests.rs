/*!
 * Tests for the subtitle document
 */

use anyhow::Result;
use subconv::formats::SubtitleFormat;
use subconv::subtitle_processor::{format_for_path, SubtitleCollection};
use crate::common::{self, cue, SAMPLE_SCC};

fn sample_collection() -> SubtitleCollection {
    SubtitleCollection::load_from_string(SAMPLE_SCC, None).unwrap()
}

fn starts(collection: &SubtitleCollection) -> Vec<f64> {
    collection.cues.iter().map(|cue| cue.start).collect()
}

/// Test that the format is detected from the header
#[test]
fn test_loadFromString_withDetectedFormat_shouldParse() {
    let collection = sample_collection();

    assert_eq!(collection.cues.len(), 3);
    assert!(collection.source_file.is_none());
}

/// Test that a byte order mark and CRLF line endings are accepted
#[test]
fn test_loadFromString_withBomAndCrlf_shouldParse() {
    let content = format!("\u{feff}{}", SAMPLE_SCC);
    let collection = SubtitleCollection::load_from_string(&content, None).unwrap();

    assert_eq!(collection.cues.len(), 3);
    assert_eq!(collection.cues[0].lines, vec!["Hello"]);
}

/// Test that content without a known header is refused unless the format is given
#[test]
fn test_loadFromString_withoutHeader_shouldNeedExplicitFormat() {
    let content = "00:00:01:00\t9470 c1c2\n";

    assert!(SubtitleCollection::load_from_string(content, None).is_err());

    let collection = SubtitleCollection::load_from_string(content, Some(SubtitleFormat::Scc)).unwrap();
    assert_eq!(collection.cues[0].lines, vec!["AB"]);
}

/// Test that added cues are kept in start order
#[test]
fn test_add_withOutOfOrderCues_shouldSortByStart() {
    let mut collection = SubtitleCollection::new();
    collection
        .add(5.0, 6.0, vec!["second".to_string()])
        .add(1.0, 2.0, vec!["first".to_string()])
        .add(9.0, 10.0, vec!["third".to_string()]);

    assert_eq!(starts(&collection), vec![1.0, 5.0, 9.0]);
}

/// Test that cues with equal starts keep insertion order
#[test]
fn test_fromCues_withEqualStarts_shouldBeStable() {
    let collection = SubtitleCollection::from_cues(vec![
        cue(3.0, 4.0, "b"),
        cue(1.0, 2.0, "a"),
        cue(3.0, 5.0, "c"),
    ]);

    let texts: Vec<String> = collection.cues.iter().map(|cue| cue.text()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

/// Test that only cues with a time strictly inside the range are removed
#[test]
fn test_remove_withRange_shouldDropCuesInside() {
    let mut collection = sample_collection();
    collection.remove(3.0, 10.0);

    assert_eq!(collection.cues.len(), 2);
    assert_eq!(collection.cues[0].lines, vec!["Hello"]);
    assert_eq!(collection.cues[1].lines, vec!["Goodbye"]);
}

/// Test that trimming keeps the middle of the document
#[test]
fn test_trim_withWindow_shouldKeepCuesInside() {
    let mut collection = sample_collection();
    collection.trim(2.0, 70.0);

    assert_eq!(collection.cues.len(), 1);
    assert_eq!(collection.cues[0].lines, vec!["How are you?", "Fine"]);
}

/// Test shifting the whole document
#[test]
fn test_shiftTime_withPositiveOffset_shouldMoveEveryCue() {
    let mut collection = sample_collection();
    collection.shift_time(2.0, 0.0, None);

    common::assert_time_eq(collection.cues[0].start, 3.0);
    common::assert_time_eq(collection.cues[0].end, 5.0);
    common::assert_time_eq(collection.cues[2].start, 76.0 + 20.0 / 29.97);
}

/// Test that shifted times never go below zero
#[test]
fn test_shiftTime_withNegativeOffset_shouldClampAtZero() {
    let mut collection = sample_collection();
    collection.shift_time(-3.5, 0.0, None);

    common::assert_time_eq(collection.cues[0].start, 0.0);
    common::assert_time_eq(collection.cues[0].end, 0.0);
    common::assert_time_eq(collection.cues[1].start, 0.5);
}

/// Test that only cues inside the window are shifted
#[test]
fn test_shiftTime_withWindow_shouldLeaveOtherCues() {
    let mut collection = sample_collection();
    collection.shift_time(10.0, 3.5, Some(10.0));

    common::assert_time_eq(collection.cues[0].start, 1.0);
    common::assert_time_eq(collection.cues[1].start, 14.0);
    common::assert_time_eq(collection.cues[2].start, 74.0 + 20.0 / 29.97);
}

/// Test that a gradual shift grows from nothing at the start to the full offset at the end
#[test]
fn test_shiftTimeGradually_withDefaultEnd_shouldStretchLinearly() {
    let mut collection = SubtitleCollection::from_cues(vec![cue(0.0, 2.0, "a"), cue(5.0, 10.0, "b")]);
    collection.shift_time_gradually(10.0, 0.0, None);

    common::assert_time_eq(collection.cues[0].start, 0.0);
    common::assert_time_eq(collection.cues[0].end, 4.0);
    common::assert_time_eq(collection.cues[1].start, 10.0);
    common::assert_time_eq(collection.cues[1].end, 20.0);
}

/// Test that times outside the window are left alone
#[test]
fn test_shiftTimeGradually_withWindow_shouldOnlyMoveTimesInside() {
    let mut collection = SubtitleCollection::from_cues(vec![
        cue(1.0, 2.0, "before"),
        cue(5.0, 7.5, "inside"),
        cue(12.0, 13.0, "after"),
    ]);
    collection.shift_time_gradually(-2.0, 5.0, Some(10.0));

    common::assert_time_eq(collection.cues[0].start, 1.0);
    common::assert_time_eq(collection.cues[0].end, 2.0);
    common::assert_time_eq(collection.cues[1].start, 5.0);
    common::assert_time_eq(collection.cues[1].end, 6.5);
    common::assert_time_eq(collection.cues[2].start, 12.0);
}

/// Test that an empty window changes nothing
#[test]
fn test_shiftTimeGradually_withEmptyWindow_shouldDoNothing() {
    let mut collection = sample_collection();
    collection.shift_time_gradually(5.0, 10.0, Some(10.0));

    common::assert_time_eq(collection.cues[0].start, 1.0);
    common::assert_time_eq(collection.cues[1].end, 6.0 + 15.0 / 29.97);
}

/// Test the latest end time
#[test]
fn test_maxTime_withCues_shouldReturnLatestEnd() {
    common::assert_time_eq(sample_collection().max_time(), 75.0 + 20.0 / 29.97);
    assert_eq!(SubtitleCollection::new().max_time(), 0.0);
}

/// Test that the extension picks the format
#[test]
fn test_formatForPath_withExtensions_shouldResolve() {
    assert_eq!(format_for_path(std::path::Path::new("movie.SCC")).unwrap(), SubtitleFormat::Scc);
    assert!(format_for_path(std::path::Path::new("movie.txt")).is_err());
    assert!(format_for_path(std::path::Path::new("movie")).is_err());
}

/// Test that a missing file is reported
#[test]
fn test_loadFromFile_withMissingFile_shouldFail() {
    assert!(SubtitleCollection::load_from_file("does/not/exist.scc", None).is_err());
}

/// Test that the source file is recorded
#[test]
fn test_loadFromFile_withSampleFile_shouldRecordSource() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_scc(temp_dir.path(), "sample.scc")?;

    let collection = SubtitleCollection::load_from_file(&path, None)?;

    assert_eq!(collection.source_file.as_deref(), Some(path.as_path()));
    assert_eq!(collection.cues.len(), 3);
    Ok(())
}

/// Test that saving to an unknown extension needs an explicit format
#[test]
fn test_save_withUnknownExtension_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let collection = sample_collection();

    assert!(collection.save(temp_dir.path().join("out.txt"), None).is_err());
    collection.save(temp_dir.path().join("out.txt"), Some(SubtitleFormat::Scc))?;
    assert!(temp_dir.path().join("out.txt").exists());
    Ok(())
}
