//! Error handling for the menu generation pipeline.
//!
//! One taxonomy for the whole crate: request/payload problems are rejected
//! up front, collaborator failures carry their underlying cause, and
//! item-level defects never appear here at all (they are dropped and
//! counted by the section builder).

use thiserror::Error;

/// Result type for menu generation operations
pub type Result<T> = std::result::Result<T, MenuGenError>;

/// Main error type for the menu generation pipeline
#[derive(Error, Debug)]
pub enum MenuGenError {
    /// Missing or inconsistent request fields, rejected before any work runs
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The classification payload did not parse as a mapping of item lists
    #[error("malformed classification payload: {reason}")]
    MalformedPayload { reason: String },

    /// The classification collaborator failed (API error, empty reply, ...)
    #[error("menu classification failed")]
    Classification(#[source] anyhow::Error),

    /// The menu document could not be read as text
    #[error("could not extract text from menu document")]
    PdfExtraction(#[source] anyhow::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
