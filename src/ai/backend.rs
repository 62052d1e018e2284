//! Backend Selection
//!
//! Enum for selecting between LLM providers (Anthropic, OpenAI).

use std::str::FromStr;

use anyhow::{anyhow, Result};

/// LLM backend provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmBackend {
    /// Anthropic Claude (default)
    #[default]
    Anthropic,
    /// OpenAI GPT
    OpenAi,
}

impl LlmBackend {
    /// Create from the MENUGEN_BACKEND environment variable
    ///
    /// Valid values: "anthropic", "claude", "openai", "gpt"
    /// Defaults to Anthropic if not set
    pub fn from_env() -> Result<Self> {
        let value = std::env::var("MENUGEN_BACKEND").unwrap_or_else(|_| "anthropic".to_string());
        value
            .parse()
            .map_err(|e: ParseBackendError| anyhow!("{}", e))
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            LlmBackend::Anthropic => "Anthropic",
            LlmBackend::OpenAi => "OpenAI",
        }
    }
}

/// Error type for parsing LlmBackend
#[derive(Debug)]
pub struct ParseBackendError(String);

impl std::fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for LlmBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(LlmBackend::Anthropic),
            "openai" | "gpt" => Ok(LlmBackend::OpenAi),
            other => Err(ParseBackendError(format!(
                "Unknown MENUGEN_BACKEND '{}'. Valid values: anthropic, claude, openai, gpt",
                other
            ))),
        }
    }
}

impl std::fmt::Display for LlmBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
