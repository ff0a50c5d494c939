/*!
 * Integration tests for the load, edit and save workflow on disk
 */

use anyhow::Result;
use subconv::app_config::Config;
use subconv::file_utils::FileManager;
use subconv::formats::{SccConverter, SubtitleFormat};
use subconv::subtitle_processor::SubtitleCollection;
use crate::common;

/// Test that we can load, modify, and save captions in a full workflow
#[test]
fn test_workflow_withShiftAndTrim_shouldWriteEditedFile() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_scc(temp_dir.path(), "episode.scc")?;
    let config = Config::default();

    let mut collection = SubtitleCollection::load_from_file(&input, None)?;
    collection.shift_time(1.0, 0.0, None).trim(0.0, 60.0);

    let output = FileManager::generate_output_path(
        &input,
        temp_dir.path().join("out"),
        &config.output.suffix,
        SubtitleFormat::Scc.extension(),
    );
    collection.save(&output, None)?;

    assert_eq!(output, temp_dir.path().join("out").join("episode.converted.scc"));

    let reloaded = SubtitleCollection::load_from_file(&output, None)?;
    assert_eq!(reloaded.cues.len(), 2);
    assert_eq!(reloaded.cues[0].lines, vec!["Hello"]);
    common::assert_time_eq(reloaded.cues[0].start, 2.0);
    common::assert_time_eq(reloaded.cues[1].start, 5.0);

    let written = FileManager::read_to_string(&output)?;
    assert!(written.starts_with("Scenarist_SCC V1.0\r\n\r\n00:00:02:00\t94ae 94ae 9420 9420"));
    Ok(())
}

/// Test the one-call conversion helper
#[test]
fn test_convert_withSampleFile_shouldWriteScenaristFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_scc(temp_dir.path(), "in.scc")?;
    let output = temp_dir.path().join("copy.scc");

    SubtitleCollection::convert(&input, &output, None)?;

    let original = SubtitleCollection::load_from_file(&input, None)?;
    let copy = SubtitleCollection::load_from_file(&output, None)?;
    assert_eq!(original.cues.len(), copy.cues.len());
    for (a, b) in original.cues.iter().zip(&copy.cues) {
        assert_eq!(a.lines, b.lines);
        common::assert_time_eq(a.start, b.start);
        common::assert_time_eq(a.end, b.end);
    }
    Ok(())
}

/// Test that a converter built from configuration writes at its frame rate
#[test]
fn test_saveWithConverter_withConfiguredFrameRate_shouldUseIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "scc": { "frame_rate": 25.0 } }"#,
    )?;
    let config = Config::load_or_default(&config_path)?;
    config.validate()?;

    let converter = SccConverter::from_config(&config.scc)?;
    let mut collection = SubtitleCollection::new();
    collection.add(1.5, 2.0, vec!["AB".to_string()]);

    let output = temp_dir.path().join("pal.scc");
    collection.save_with_converter(&output, &converter)?;

    let written = FileManager::read_to_string(&output)?;
    assert!(written.contains("00:00:01:13\t94ae"));
    assert!(written.contains("00:00:02:00\t942c 942c"));
    Ok(())
}

/// Test that an empty document still writes a valid header
#[test]
fn test_save_withNoCues_shouldWriteHeaderOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("empty.scc");

    SubtitleCollection::new().save(&output, None)?;

    assert_eq!(FileManager::read_to_string(&output)?, "Scenarist_SCC V1.0\r\n\r\n");
    assert!(SubtitleCollection::load_from_file(&output, None)?.cues.is_empty());
    Ok(())
}
