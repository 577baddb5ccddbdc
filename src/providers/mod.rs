/*!
 * Provider implementation for the summarization service.
 *
 * This module contains the client for the OpenRouter API, a model-routing
 * service exposing an OpenAI-compatible chat-completion endpoint.
 */

pub mod openrouter;
