//! LLM boundary: classification of raw menu text.
//!
//! Providers implement [`LlmClient`]; the backend is picked from the
//! MENUGEN_BACKEND environment variable. Everything past the client
//! trait is provider-agnostic.

pub mod anthropic_client;
pub mod backend;
pub mod classifier;
pub mod client_factory;
pub mod llm_client;
pub mod openai_client;

pub use anthropic_client::AnthropicClient;
pub use backend::LlmBackend;
pub use classifier::MenuClassifier;
pub use client_factory::{client_from_config, create_llm_client};
pub use llm_client::LlmClient;
pub use openai_client::OpenAiClient;
