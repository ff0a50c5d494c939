/*!
 * Tests for error types
 */

use subconv::errors::{AppError, SubtitleError};

/// Test the codec error messages
#[test]
fn test_subtitleError_display_shouldDescribeProblem() {
    let error = SubtitleError::InvalidTimecode("expected HH:MM:SS:FF, got '1:2'".to_string());
    assert_eq!(error.to_string(), "Invalid timecode: expected HH:MM:SS:FF, got '1:2'");

    let error = SubtitleError::TooManyLines { start: 1.5, count: 6, max: 4 };
    assert_eq!(error.to_string(), "Cue at 1.500s needs 6 rows, at most 4 can be displayed");

    assert_eq!(SubtitleError::UnsupportedFormat("vtt".to_string()).to_string(), "Unsupported subtitle format: vtt");
    assert_eq!(SubtitleError::InvalidFrameRate(0.0).to_string(), "Invalid frame rate: 0");
}

/// Test conversions into the application error
#[test]
fn test_appError_from_shouldWrapSources() {
    let error: AppError = SubtitleError::InvalidFrameRate(-1.0).into();
    assert!(matches!(error, AppError::Subtitle(SubtitleError::InvalidFrameRate(_))));

    let error: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(error, AppError::File(_)));
    assert_eq!(error.to_string(), "File error: gone");

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Config(_)));

    let error: AppError = anyhow::anyhow!("something else").into();
    assert_eq!(error.to_string(), "Unknown error: something else");
}

/// Test the messages the CLI reports for bad configuration and missing input
#[test]
fn test_appError_display_withCliFailures_shouldDescribeProblem() {
    let error = AppError::Config("Line length must be between 1 and 32, got 40".to_string());
    assert_eq!(error.to_string(), "Configuration error: Line length must be between 1 and 32, got 40");

    let error = anyhow::Error::from(AppError::File("Input path does not exist: \"x.scc\"".to_string()))
        .context("Conversion failed");
    assert_eq!(error.to_string(), "Conversion failed");
    assert!(matches!(error.downcast_ref::<AppError>(), Some(AppError::File(_))));
}
