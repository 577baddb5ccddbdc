/*!
 * Summary output with a generation-timestamp metadata header.
 */

use std::path::Path;

use chrono::Local;

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Timestamp format used in the metadata header
const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the full file content for a summary and a timestamp
///
/// The header block is byte-exact: `---`, `Generato il: <timestamp>`, `---`,
/// a blank line, then the summary verbatim with nothing appended.
pub fn render(summary: &str, timestamp: &str) -> String {
    format!("---\nGenerato il: {}\n---\n\n{}", timestamp, summary)
}

/// Write the summary to the output path, overwriting any existing file
///
/// The generation timestamp is computed at write time, not at request time.
pub fn write_summary<P: AsRef<Path>>(path: P, summary: &str) -> Result<(), AppError> {
    let timestamp = Local::now().format(HEADER_TIMESTAMP_FORMAT).to_string();
    let content = render(summary, &timestamp);

    FileManager::write_to_file(&path, &content).map_err(|e| AppError::Output(format!("{:#}", e)))
}
