use std::time::Duration;

use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

/// Default OpenRouter API base URL
pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";

/// OpenRouter client for interacting with the OpenRouter API
pub struct OpenRouter {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL (defaults to the public OpenRouter endpoint)
    base_url: String,
}

/// Chat message object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

/// Chat-completion request for the OpenRouter API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// Model identifier, forwarded as-is to the routing service
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Whether to stream the response
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u32,
    /// Number of generated tokens
    pub completion_tokens: u32,
    /// Total tokens billed for the request
    pub total_tokens: u32,
}

/// Chat-completion response from the OpenRouter API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// The generated choices
    pub choices: Vec<ChatChoice>,

    /// Token usage information, when the provider reports it
    pub usage: Option<TokenUsage>,
}

/// Individual choice in a chat-completion response
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The response message
    pub message: ChatMessage,

    /// Why generation stopped, when reported
    pub finish_reason: Option<String>,
}

impl ChatRequest {
    /// Create a new chat request for the given model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            stream: Some(false),
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl ChatResponse {
    /// Text of the first response choice, if any
    pub fn first_choice_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

impl OpenRouter {
    /// Create a new OpenRouter client against the public API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_url(api_key, OPENROUTER_API_BASE)
    }

    /// Create a new OpenRouter client from a complete base URL
    pub fn from_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Complete a chat request
    ///
    /// Issues exactly one synchronous request; no retry is attempted.
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let api_url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenRouter API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}
