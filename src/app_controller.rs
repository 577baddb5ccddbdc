use log::{info, warn};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::providers::openrouter::OpenRouter;
use crate::summarizer::Summarizer;
use crate::summary_writer;
use crate::transcript_processor::Transcript;

// @module: Application controller for transcript summarization

/// Main application controller
///
/// Sequences the run: read transcript, summarize, write summary. Each step
/// owns its data exclusively and hands an immutable value to the next; any
/// failure aborts the whole run.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Run the main workflow
    pub async fn run(&self) -> Result<(), AppError> {
        info!(
            "📖 Lettura trascrizione da: {}",
            self.config.input_file.display()
        );
        let transcript = Transcript::from_file(&self.config.input_file)?;
        if transcript.is_empty() {
            warn!("La trascrizione è vuota, il riassunto potrebbe essere privo di contenuto");
        }

        info!("🤖 Generazione riassunto con OpenRouter...");
        let client = OpenRouter::new(&self.config.api_key);
        let summarizer = Summarizer::new(client, &self.config.model);
        let summary = summarizer.summarize(&transcript.text).await?;

        info!("💾 Salvataggio in: {}", self.config.output_file.display());
        summary_writer::write_summary(&self.config.output_file, &summary)?;
        info!("✅ Riassunto salvato in: {}", self.config.output_file.display());

        info!("✨ Completato!");

        Ok(())
    }
}
