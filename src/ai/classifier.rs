//! Menu Classifier
//!
//! Turns raw menu text into a category → items mapping by prompting the
//! configured LLM and parsing its reply through the strict ingestion
//! path. The provider is a black box here: transport failures and empty
//! replies surface as classification errors with the cause attached, and
//! a reply that is not a mapping of item lists is rejected, never
//! patched up.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::error::{MenuGenError, Result};
use crate::menu::catalog;
use crate::menu::ingest::{self, ClassifiedMenu};

use super::llm_client::LlmClient;

/// LLM-backed menu text classifier
pub struct MenuClassifier {
    llm: Arc<dyn LlmClient>,
}

impl MenuClassifier {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Classify free-form menu text into the catalog's categories
    pub async fn classify(&self, menu_text: &str) -> Result<ClassifiedMenu> {
        tracing::info!(
            provider = self.llm.provider_name(),
            model = self.llm.model_name(),
            chars = menu_text.len(),
            "classifying menu text"
        );

        let reply = self
            .llm
            .chat_json(&system_prompt(), menu_text)
            .await
            .map_err(MenuGenError::Classification)?;

        ingest::parse_classification(&reply)
    }
}

/// Build the classification system prompt from the catalog's key set
fn system_prompt() -> String {
    let mut prompt = String::from(
        "You classify restaurant menu text into a fixed set of categories.\n\
         Return a single JSON object mapping category keys to arrays of items.\n\
         Each item is an object: {\"name\": string, \"price\": number, \"description\": string}.\n\
         Omit the description field when the menu gives none. Use the price\n\
         exactly as printed (a decimal comma is acceptable). Omit categories\n\
         with no items. Never invent items.\n\nValid category keys:\n",
    );
    for key in catalog::category_keys() {
        let _ = writeln!(prompt, "- {key}");
    }
    prompt
}
