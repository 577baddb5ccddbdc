use std::env;
use std::path::PathBuf;

use chrono::Local;
use log::LevelFilter;

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Environment variable carrying the OpenRouter API key (required)
pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";

/// Environment variable carrying the model identifier (optional)
pub const ENV_MODEL: &str = "OPENROUTER_MODEL";

/// Represents the run configuration
///
/// Derived once per invocation from command-line arguments and environment
/// variables, and immutable for the run's duration. No other component
/// reads the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input transcript path (plain text or `.vtt`)
    pub input_file: PathBuf,

    /// Output summary path
    pub output_file: PathBuf,

    /// OpenRouter API key
    pub api_key: String,

    /// Model identifier, forwarded as-is (may be empty)
    pub model: String,

    /// Log level
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Corresponding `log` crate filter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Build a configuration from explicit values
    ///
    /// Pure constructor used by `resolve` and by tests: no environment
    /// access, no clock beyond the default output filename already being
    /// supplied by the caller. A missing or empty API key is a fatal
    /// configuration error; the model identifier is passed through without
    /// validation, empty if unset.
    pub fn from_values(
        input_file: PathBuf,
        output_file: PathBuf,
        api_key: Option<String>,
        model: Option<String>,
        log_level: LogLevel,
    ) -> Result<Self, AppError> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(AppError::Config(format!(
                    "Imposta la variabile d'ambiente {}\n\nEsempio:\n  export {}='your-api-key-here'",
                    ENV_API_KEY, ENV_API_KEY
                )));
            }
        };

        Ok(Config {
            input_file,
            output_file,
            api_key,
            model: model.unwrap_or_default(),
            log_level,
        })
    }

    /// Resolve the configuration from arguments and the environment
    ///
    /// The output path defaults to `summary_<YYYYMMDD_HHMMSS>.md` using the
    /// invocation-time timestamp when not supplied.
    pub fn resolve(
        input_file: PathBuf,
        output_file: Option<PathBuf>,
        log_level: LogLevel,
    ) -> Result<Self, AppError> {
        let output_file =
            output_file.unwrap_or_else(|| FileManager::default_summary_path(Local::now()));

        Self::from_values(
            input_file,
            output_file,
            env::var(ENV_API_KEY).ok(),
            env::var(ENV_MODEL).ok(),
            log_level,
        )
    }
}
