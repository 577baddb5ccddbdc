/*!
 * Error types for the verbale application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when working with the provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("invio della richiesta fallito: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("risposta API non valida: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("errore API ({status_code}): {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },
}

/// Errors that can occur while loading a transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The input file does not exist
    #[error("Errore: File '{}' non trovato", .0.display())]
    NotFound(PathBuf),

    /// Any other read failure (permissions, encoding, I/O)
    #[error("Errore durante la lettura del file: {source}")]
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Main application error type that wraps all other errors
///
/// Each variant corresponds to one class of terminal failure; the entry
/// point maps any of them to a single console diagnostic and exit code 1.
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrong command-line usage
    #[error("{0}")]
    Usage(String),

    /// Missing or invalid run configuration
    #[error("{0}")]
    Config(String),

    /// Error while reading the transcript
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// Error from the completion request
    #[error("Errore durante la chiamata API: {0}")]
    Provider(#[from] ProviderError),

    /// Error while writing the summary file
    #[error("Errore durante il salvataggio del file: {0}")]
    Output(String),
}
