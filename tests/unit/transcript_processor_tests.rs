/*!
 * Tests for transcript loading and WebVTT parsing functionality
 */

use anyhow::Result;
use verbale::transcript_processor::Transcript;

use crate::common;

/// Test that plain-text files pass through unchanged
#[test]
fn test_from_file_withPlainTextFile_shouldReturnRawContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "Prima riga della riunione.\nSeconda riga.\n\nUltima riga.";
    let file_path = common::create_test_file(temp_dir.path(), "meeting.txt", content)?;

    let transcript = Transcript::from_file(&file_path)?;

    // Identity property: raw content, byte for byte
    assert_eq!(transcript.text, content);
    assert_eq!(transcript.source_file, file_path);
    Ok(())
}

/// Test that the caption extension is matched case-insensitively
#[test]
fn test_is_caption_file_withVariousExtensions_shouldMatchCaseInsensitively() {
    assert!(Transcript::is_caption_file("meeting.vtt"));
    assert!(Transcript::is_caption_file("meeting.VTT"));
    assert!(Transcript::is_caption_file("meeting.Vtt"));
    assert!(!Transcript::is_caption_file("meeting.txt"));
    assert!(!Transcript::is_caption_file("meeting.srt"));
    assert!(!Transcript::is_caption_file("meeting"));
}

/// Test that a VTT file goes through the caption parser
#[test]
fn test_from_file_withVttFile_shouldStripScaffolding() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = common::create_test_vtt(temp_dir.path(), "meeting.vtt")?;

    let transcript = Transcript::from_file(&file_path)?;

    assert_eq!(
        transcript.text,
        "Buongiorno a tutti.\nIniziamo con il primo punto all'ordine del giorno.\nIl budget per il prossimo trimestre."
    );
    Ok(())
}

/// Test that a missing file yields a not-found error
#[test]
fn test_from_file_withMissingFile_shouldReturnNotFound() {
    let result = Transcript::from_file("does_not_exist.txt");

    let err = result.expect_err("missing file should not load");
    assert!(err.to_string().contains("non trovato"));
}

/// Test parsing of an empty caption document
#[test]
fn test_parse_vtt_withEmptyContent_shouldReturnEmptyString() {
    assert_eq!(Transcript::parse_vtt(""), "");
}

/// Test parsing of a header-only caption document
#[test]
fn test_parse_vtt_withHeaderAndBlankLinesOnly_shouldReturnEmptyString() {
    let content = "WEBVTT\n\n\n\n";
    assert_eq!(Transcript::parse_vtt(content), "");
}

/// Test parsing of a single cue
#[test]
fn test_parse_vtt_withSingleCue_shouldReturnSpokenLine() {
    let content = "WEBVTT\n\n1\n00:00:01.000 --> 00:00:04.000\nHello world\n";
    assert_eq!(Transcript::parse_vtt(content), "Hello world");
}

/// Test that overlapping-cue repetitions are preserved, not deduplicated
#[test]
fn test_parse_vtt_withOverlappingCues_shouldPreserveRepetition() {
    let content = "WEBVTT\n\n\
1\n00:00:01.000 --> 00:00:03.000\nI think\n\n\
2\n00:00:02.000 --> 00:00:05.000\nI think we should\n";

    assert_eq!(Transcript::parse_vtt(content), "I think\nI think we should");
}

/// Test that UUID-style cue identifiers are discarded
#[test]
fn test_parse_vtt_withUuidCueIdentifiers_shouldDiscardThem() {
    let content = "WEBVTT\n\n\
a1b2c3d4-e5f6-7890-abcd-ef1234567890\n\
00:00:01.000 --> 00:00:04.000\n\
Benvenuti alla riunione\n";

    assert_eq!(Transcript::parse_vtt(content), "Benvenuti alla riunione");
}

/// Test the documented case asymmetry of the identifier filter: lowercase
/// hex identifiers are discarded, uppercase ones are retained
#[test]
fn test_parse_vtt_withIdentifierCaseAsymmetry_shouldOnlyDiscardLowercase() {
    let lowercase = "WEBVTT\n\na1b2-c3d4\n00:00:01.000 --> 00:00:04.000\nCiao\n";
    assert_eq!(Transcript::parse_vtt(lowercase), "Ciao");

    let uppercase = "WEBVTT\n\nA1B2-C3D4\n00:00:01.000 --> 00:00:04.000\nCiao\n";
    assert_eq!(Transcript::parse_vtt(uppercase), "A1B2-C3D4\nCiao");
}

/// Test that timestamp lines with trailing cue settings are still discarded
#[test]
fn test_parse_vtt_withCueSettings_shouldDiscardTimestampLine() {
    let content = "WEBVTT\n\n\
00:00:01.000 --> 00:00:04.000 align:start position:0%\n\
Una riga di parlato\n";

    assert_eq!(Transcript::parse_vtt(content), "Una riga di parlato");
}

/// Test that retained lines are trimmed but kept in original order
#[test]
fn test_parse_vtt_withIndentedText_shouldTrimAndPreserveOrder() {
    let content = "WEBVTT\n\n\
1\n00:00:01.000 --> 00:00:02.000\n   prima riga   \n\n\
2\n00:00:02.000 --> 00:00:03.000\nseconda riga\n";

    assert_eq!(Transcript::parse_vtt(content), "prima riga\nseconda riga");
}

/// Test the empty-transcript helper
#[test]
fn test_is_empty_withEmptyAndNonEmptyText_shouldReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let empty = common::create_test_file(temp_dir.path(), "empty.vtt", "WEBVTT\n\n")?;
    let transcript = Transcript::from_file(&empty)?;
    assert!(transcript.is_empty());

    let full = common::create_test_file(temp_dir.path(), "full.txt", "qualcosa")?;
    let transcript = Transcript::from_file(&full)?;
    assert!(!transcript.is_empty());
    Ok(())
}

/// Test transcript display formatting
#[test]
fn test_transcript_display_withText_shouldRenderText() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file_path = common::create_test_file(temp_dir.path(), "meeting.txt", "solo testo")?;

    let transcript = Transcript::from_file(&file_path)?;

    assert_eq!(format!("{}", transcript), "solo testo");
    Ok(())
}
