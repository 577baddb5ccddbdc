use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TranscriptError;

// @module: Transcript loading and WebVTT parsing

// @const: WebVTT cue timestamp-range regex, anchored at line start so that
// trailing cue settings after the arrow are tolerated
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{3}\s+-->\s+\d{2}:\d{2}:\d{2}\.\d{3}").unwrap()
});

// @const: Cue identifier regex (UUID-style lines). Lowercase hex only:
// uppercase identifiers are retained, a long-standing quirk kept for
// behavioral compatibility.
static CUE_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-f0-9-]+$").unwrap());

/// The WebVTT format header keyword
const VTT_HEADER: &str = "WEBVTT";

/// File extension that triggers WebVTT parsing (matched case-insensitively)
const VTT_EXTENSION: &str = "vtt";

/// A meeting transcript loaded into memory
///
/// The text is immutable once read: either the raw content of a plain-text
/// file, or the spoken lines filtered out of a WebVTT caption file.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Source filename
    pub source_file: PathBuf,

    /// Transcript text
    pub text: String,
}

impl Transcript {
    /// Load a transcript from a file (supports plain text and `.vtt`)
    ///
    /// Files with the `.vtt` extension are run through the WebVTT parser;
    /// everything else is returned as-is.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TranscriptError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TranscriptError::NotFound(path.to_path_buf())
            } else {
                TranscriptError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let text = if Self::is_caption_file(path) {
            info!("📹 Rilevato file VTT - parsing della trascrizione...");
            Self::parse_vtt(&content)
        } else {
            content
        };

        debug!("Trascrizione caricata: {} caratteri", text.chars().count());

        Ok(Transcript {
            source_file: path.to_path_buf(),
            text,
        })
    }

    /// Check whether a path carries the caption-file extension
    pub fn is_caption_file<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(VTT_EXTENSION))
    }

    /// Parse WebVTT content and extract only the spoken-text lines
    ///
    /// Scaffolding lines are discarded: the `WEBVTT` header, blank lines,
    /// cue identifiers (UUID-style or plain sequence numbers) and timestamp
    /// ranges. Every retained line is trimmed and kept in original order,
    /// one physical line per output line. Captions frequently repeat words
    /// across overlapping cues; those repetitions are preserved as-is, not
    /// deduplicated.
    pub fn parse_vtt(content: &str) -> String {
        let mut transcript_lines = Vec::new();

        for line in content.split('\n') {
            let line = line.trim();

            // Skip the WEBVTT header and blank lines
            if line == VTT_HEADER || line.is_empty() {
                continue;
            }

            // Skip cue identifiers (UUID-style or digit-only lines)
            if CUE_ID_REGEX.is_match(line) || line.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }

            // Skip timestamp ranges
            if TIMESTAMP_REGEX.is_match(line) {
                continue;
            }

            transcript_lines.push(line);
        }

        transcript_lines.join("\n")
    }

    /// Whether the transcript carries no text at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
