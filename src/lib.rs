/*!
 * # Verbale
 *
 * A Rust command-line tool that turns meeting transcripts into detailed
 * Markdown summaries using the OpenRouter API.
 *
 * ## Features
 *
 * - Read plain-text transcripts or WebVTT caption files exported from
 *   Microsoft Teams
 * - Strip WebVTT scaffolding (header, cue identifiers, timestamp ranges)
 *   while preserving spoken lines in order
 * - Generate a structured Italian summary (detailed summary, key points,
 *   decisions and actions, next steps) through a single chat-completion
 *   request
 * - Write the summary as Markdown with a generation-timestamp header
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Run configuration from CLI arguments and environment
 * - `transcript_processor`: Transcript loading and WebVTT parsing
 * - `prompts`: Prompt templates for meeting summarization
 * - `summarizer`: The summarization service built on top of a provider
 * - `summary_writer`: Markdown output with metadata header
 * - `app_controller`: Main application controller
 * - `providers`: Client implementation for the OpenRouter API
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod prompts;
pub mod providers;
pub mod summarizer;
pub mod summary_writer;
pub mod transcript_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ProviderError, TranscriptError};
pub use summarizer::Summarizer;
pub use transcript_processor::Transcript;
