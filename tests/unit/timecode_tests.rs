/*!
 * Tests for timecode parsing and formatting
 */

use subconv::errors::SubtitleError;
use subconv::formats::scc::timecode::TimecodeConverter;
use crate::common;

/// Test that frames are converted at 29.97 fps
#[test]
fn test_parse_withNtscTimecode_shouldUseFrameRate() {
    let timecodes = TimecodeConverter::default();

    common::assert_time_eq(timecodes.parse("00:01:14:20").unwrap(), 74.0 + 20.0 / 29.97);
    common::assert_time_eq(timecodes.parse("01:00:00:00").unwrap(), 3600.0);
    common::assert_time_eq(timecodes.parse("00:00:00:00").unwrap(), 0.0);
}

/// Test that a wrong field count is rejected
#[test]
fn test_parse_withWrongFieldCount_shouldFail() {
    let timecodes = TimecodeConverter::default();

    for input in ["00:00:01", "00:00:00:00:00", "", "12"] {
        assert!(
            matches!(timecodes.parse(input), Err(SubtitleError::InvalidTimecode(_))),
            "'{}' should be rejected",
            input
        );
    }
}

/// Test that non-numeric fields are rejected
#[test]
fn test_parse_withNonNumericField_shouldFail() {
    let timecodes = TimecodeConverter::default();

    assert!(matches!(timecodes.parse("aa:00:00:00"), Err(SubtitleError::InvalidTimecode(_))));
    assert!(matches!(timecodes.parse("00:00:-1:00"), Err(SubtitleError::InvalidTimecode(_))));
    assert!(matches!(timecodes.parse("00::00:00"), Err(SubtitleError::InvalidTimecode(_))));
}

/// Test formatting of whole and fractional seconds
#[test]
fn test_format_withSeconds_shouldWriteTimecode() {
    let timecodes = TimecodeConverter::default();

    assert_eq!(timecodes.format(0.0), "00:00:00:00");
    assert_eq!(timecodes.format(3.0), "00:00:03:00");
    assert_eq!(timecodes.format(3661.5), "01:01:01:15");
}

/// Test that a fraction rounding up to a whole second stays on the last frame
#[test]
fn test_format_withFractionNearWholeSecond_shouldClampFrame() {
    let timecodes = TimecodeConverter::default();

    assert_eq!(timecodes.format(5.999), "00:00:05:29");
    assert_eq!(TimecodeConverter::new(25.0).unwrap().format(5.999), "00:00:05:24");
}

/// Test that hours wrap at 24
#[test]
fn test_format_withMoreThanADay_shouldWrapHours() {
    let timecodes = TimecodeConverter::default();

    assert_eq!(timecodes.format(25.0 * 3600.0 + 2.0), "01:00:02:00");
}

/// Test that every frame number survives parse then format
#[test]
fn test_formatParse_withEveryFrame_shouldReproduceTimecode() {
    let timecodes = TimecodeConverter::default();

    for frame in 0..=29 {
        let timecode = format!("00:10:42:{:02}", frame);
        let seconds = timecodes.parse(&timecode).unwrap();
        assert_eq!(timecodes.format(seconds), timecode);
    }
}

/// Test the highest frame per rate
#[test]
fn test_maxFrame_withCommonRates_shouldBeLastFrameOfSecond() {
    assert_eq!(TimecodeConverter::default().max_frame(), 29);
    assert_eq!(TimecodeConverter::new(30.0).unwrap().max_frame(), 29);
    assert_eq!(TimecodeConverter::new(25.0).unwrap().max_frame(), 24);
    assert_eq!(TimecodeConverter::new(23.976).unwrap().max_frame(), 23);
}

/// Test that invalid frame rates are refused
#[test]
fn test_new_withInvalidFrameRate_shouldFail() {
    for rate in [0.0, -29.97, f64::NAN, f64::INFINITY] {
        assert!(matches!(TimecodeConverter::new(rate), Err(SubtitleError::InvalidFrameRate(_))));
    }
}

/// Test frame distance between two times
#[test]
fn test_framesBetween_withOneSecond_shouldEqualFrameRate() {
    let timecodes = TimecodeConverter::default();

    assert!((timecodes.frames_between(1.0, 2.0) - 29.97).abs() < 1e-9);
    assert!(timecodes.frames_between(2.0, 1.0) < 0.0);
}
