/*!
 * Common test utilities for the verbale test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample WebVTT caption file for testing
pub fn create_test_vtt(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "WEBVTT\n\
\n\
1\n\
00:00:01.000 --> 00:00:04.000\n\
Buongiorno a tutti.\n\
\n\
2\n\
00:00:04.500 --> 00:00:08.000\n\
Iniziamo con il primo punto all'ordine del giorno.\n\
\n\
3\n\
00:00:08.500 --> 00:00:12.000\n\
Il budget per il prossimo trimestre.\n";
    create_test_file(dir, filename, content)
}
