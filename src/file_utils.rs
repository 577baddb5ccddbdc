use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

// @module: File and directory utilities

// @const: Timestamp format used in the default output filename
const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Default output path for a summary, derived from the
    // invocation-time timestamp (summary_<YYYYMMDD_HHMMSS>.md)
    pub fn default_summary_path(now: DateTime<Local>) -> PathBuf {
        PathBuf::from(format!(
            "summary_{}.md",
            now.format(OUTPUT_TIMESTAMP_FORMAT)
        ))
    }

    /// Write a string to a file, overwriting any existing content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                Self::ensure_dir(parent)?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
