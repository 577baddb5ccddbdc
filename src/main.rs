// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};

use verbale::app_config::{Config, LogLevel};
use verbale::app_controller::Controller;
use verbale::errors::AppError;

/// Usage hint shown when no transcript file is supplied
const USAGE_HINT: &str = "Uso: verbale <file_trascrizione> [file_output]\n\nEsempio:\n  verbale meeting_transcript.txt\n  verbale meeting_transcript.txt summary.md";

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a meeting transcript (default command)
    #[command(alias = "riassumi")]
    Summarize(SummarizeArgs),

    /// Generate shell completions for verbale
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Transcript file to summarize (plain text or .vtt)
    #[arg(value_name = "FILE_TRASCRIZIONE")]
    input_file: PathBuf,

    /// Output Markdown file (default: summary_<timestamp>.md)
    #[arg(value_name = "FILE_OUTPUT")]
    output_file: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Verbale - AI meeting summaries from Teams transcripts
///
/// Reads a meeting transcript (plain text or WebVTT captions), generates a
/// detailed Italian summary through the OpenRouter API and saves it as
/// Markdown.
#[derive(Parser, Debug)]
#[command(name = "verbale")]
#[command(version = "1.0.0")]
#[command(about = "Riassunti AI di trascrizioni di meeting")]
#[command(long_about = "Verbale legge una trascrizione di meeting (testo semplice o sottotitoli WebVTT),
genera un riassunto dettagliato tramite l'API di OpenRouter e lo salva in Markdown.

EXAMPLES:
    verbale meeting_transcript.txt              # Output in summary_<timestamp>.md
    verbale meeting_transcript.vtt summary.md   # File VTT con output esplicito
    verbale -l debug meeting.txt                # Logging dettagliato
    verbale completions bash > verbale.bash     # Completamento shell

CONFIGURATION:
    OPENROUTER_API_KEY   API key OpenRouter (obbligatoria)
    OPENROUTER_MODEL     Identificativo del modello (opzionale)

    Le variabili possono essere definite anche in un file .env nella
    directory corrente.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file to summarize (plain text or .vtt)
    #[arg(value_name = "FILE_TRASCRIZIONE")]
    input_file: Option<PathBuf>,

    /// Output Markdown file (default: summary_<timestamp>.md)
    #[arg(value_name = "FILE_OUTPUT")]
    output_file: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", ""),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {}{}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Load a .env file, if present, before anything reads the environment
    dotenvy::dotenv().ok();

    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Impossibile inizializzare il logger");
    }

    // Parse command line arguments using clap. Any parse failure maps to
    // exit code 1; --help and --version keep clap's zero exit.
    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "verbale", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => {
            // Default behavior - use top-level args
            match cli.input_file {
                Some(input_file) => {
                    run_summarize(SummarizeArgs {
                        input_file,
                        output_file: cli.output_file,
                        log_level: cli.log_level,
                    })
                    .await
                }
                None => Err(AppError::Usage(USAGE_HINT.to_string())),
            }
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<(), AppError> {
    let log_level: LogLevel = options.log_level.map(Into::into).unwrap_or_default();
    log::set_max_level(log_level.to_level_filter());

    let config = Config::resolve(options.input_file, options.output_file, log_level)?;

    Controller::with_config(config).run().await
}
