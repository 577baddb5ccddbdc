/*!
 * Summarization service built on top of the OpenRouter provider.
 */

use log::debug;

use crate::errors::ProviderError;
use crate::prompts::PromptTemplate;
use crate::providers::openrouter::{ChatRequest, OpenRouter};

/// Summarization service
///
/// Holds the provider client and the model identifier for the run. The
/// model is an opaque pass-through value: an empty identifier is forwarded
/// as-is and left to the routing service to reject.
pub struct Summarizer {
    /// Provider client
    client: OpenRouter,
    /// Model identifier
    model: String,
}

impl Summarizer {
    /// Create a new summarizer for the given client and model
    pub fn new(client: OpenRouter, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Generate a meeting summary for the given transcript
    ///
    /// Issues a single chat-completion request carrying the fixed system
    /// instruction and the rendered user prompt, and returns the first
    /// choice's message text unprocessed.
    pub async fn summarize(&self, transcript: &str) -> Result<String, ProviderError> {
        let prompt = PromptTemplate::meeting_summary().render(transcript);

        let request = ChatRequest::new(&self.model)
            .add_message("system", PromptTemplate::MEETING_SUMMARY_SYSTEM)
            .add_message("user", prompt);

        let response = self.client.complete(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Token usati: {} prompt + {} completamento = {} totali",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        response
            .first_choice_text()
            .map(|text| text.to_string())
            .ok_or_else(|| {
                ProviderError::ParseError("la risposta non contiene alcuna scelta".to_string())
            })
    }
}
