//! Process configuration and restaurant metadata.
//!
//! One `AppConfig` is built from the environment at process start and
//! passed by reference to whoever needs it. The core transformation
//! components take no configuration at all; the `RestaurantProfile`
//! travels with each generation request and only the assembler reads it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How diners reach the menu from the QR code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrMode {
    /// Order from the table
    #[default]
    Table,
    /// Order and pay at the counter
    Counter,
}

/// Display palette pushed to the ordering platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#1F2937".to_string(),
            secondary: "#F9FAFB".to_string(),
            accent: "#B45309".to_string(),
        }
    }
}

/// Per-request restaurant metadata, consumed by the document assembler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantProfile {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub colors: ColorPalette,
    #[serde(default)]
    pub qr_mode: QrMode,
    /// Banner image paths uploaded alongside the documents
    #[serde(default)]
    pub banners: Vec<String>,
}

impl RestaurantProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            colors: ColorPalette::default(),
            qr_mode: QrMode::default(),
            banners: Vec::new(),
        }
    }
}

/// Process-wide configuration, read once from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    /// Where the local sink writes generated documents
    pub output_dir: PathBuf,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let output_dir = std::env::var("MENUGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("generated"));
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        Self {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            output_dir,
            port,
        }
    }
}
