//! PDF text extraction boundary.
//!
//! The pipeline only needs bytes → text; everything about PDF internals
//! stays behind [`TextExtractor`].

use anyhow::anyhow;

use crate::error::{MenuGenError, Result};

/// Black-box menu document → text extraction
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Default extractor backed by `pdf-extract`
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| MenuGenError::PdfExtraction(anyhow!("{e}")))?;
        if text.trim().is_empty() {
            return Err(MenuGenError::PdfExtraction(anyhow!(
                "document contains no extractable text"
            )));
        }
        Ok(text)
    }
}
