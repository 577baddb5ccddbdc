/*!
 * End-to-end summarization workflow tests
 *
 * These tests exercise the read -> summarize -> write sequence without a
 * live OpenRouter endpoint: failures must surface as typed errors and
 * never produce output files.
 */

use std::path::PathBuf;

use anyhow::Result;
use verbale::app_config::{Config, LogLevel};
use verbale::app_controller::Controller;
use verbale::errors::{AppError, ProviderError};
use verbale::providers::openrouter::OpenRouter;
use verbale::summarizer::Summarizer;
use verbale::transcript_processor::Transcript;

use crate::common;

/// Test the reader leg of the workflow on a realistic VTT fixture
#[test]
fn test_workflow_withVttInput_shouldProduceFilteredTranscript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_vtt(temp_dir.path(), "meeting.vtt")?;

    let transcript = Transcript::from_file(&input)?;

    assert!(transcript.text.starts_with("Buongiorno a tutti."));
    assert!(!transcript.text.contains("WEBVTT"));
    assert!(!transcript.text.contains("-->"));
    Ok(())
}

/// Test that a run against a missing input file fails before any network
/// call and writes nothing
#[tokio::test]
async fn test_run_withMissingInputFile_shouldFailBeforeNetwork() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output_file = temp_dir.path().join("summary.md");

    let config = Config::from_values(
        PathBuf::from("inesistente.txt"),
        output_file.clone(),
        Some("sk-or-v1-test".to_string()),
        None,
        LogLevel::Error,
    )?;

    let result = Controller::with_config(config).run().await;

    let err = result.expect_err("missing input should abort the run");
    assert!(matches!(err, AppError::Transcript(_)));
    assert!(!output_file.exists());
    Ok(())
}

/// Test that configuration resolution fails before any file or network I/O
/// when the credential is absent
#[test]
fn test_config_withoutCredential_shouldFailBeforeAnythingRuns() {
    let result = Config::from_values(
        PathBuf::from("meeting.txt"),
        PathBuf::from("summary.md"),
        None,
        None,
        LogLevel::Info,
    );

    assert!(matches!(result, Err(AppError::Config(_))));
}

/// Test that a transport failure surfaces as a request error, not a panic
#[tokio::test]
async fn test_summarize_withUnreachableEndpoint_shouldReturnRequestError() {
    // Nothing listens on this port; the connection is refused immediately
    let client = OpenRouter::from_url("sk-or-v1-test", "http://127.0.0.1:9");
    let summarizer = Summarizer::new(client, "test-model");

    let result = summarizer.summarize("una breve trascrizione").await;

    assert!(matches!(result, Err(ProviderError::RequestFailed(_))));
}
