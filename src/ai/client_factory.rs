//! Client factory: resolve the configured backend to a boxed client.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use super::anthropic_client::AnthropicClient;
use super::backend::LlmBackend;
use super::llm_client::LlmClient;
use super::openai_client::OpenAiClient;
use crate::config::AppConfig;

/// Create an LLM client for the given backend and API key
pub fn create_llm_client(backend: LlmBackend, api_key: String) -> Arc<dyn LlmClient> {
    match backend {
        LlmBackend::Anthropic => Arc::new(AnthropicClient::new(api_key)),
        LlmBackend::OpenAi => Arc::new(OpenAiClient::new(api_key)),
    }
}

/// Create an LLM client from process configuration, honoring
/// MENUGEN_BACKEND for provider selection
pub fn client_from_config(config: &AppConfig) -> Result<Arc<dyn LlmClient>> {
    let backend = LlmBackend::from_env()?;
    let api_key = match backend {
        LlmBackend::Anthropic => config
            .anthropic_api_key
            .clone()
            .ok_or_else(|| anyhow!("ANTHROPIC_API_KEY not configured"))?,
        LlmBackend::OpenAi => config
            .openai_api_key
            .clone()
            .ok_or_else(|| anyhow!("OPENAI_API_KEY not configured"))?,
    };
    tracing::info!(backend = %backend, "LLM client configured");
    Ok(create_llm_client(backend, api_key))
}
