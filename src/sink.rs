//! Delivery boundary for generated documents and image assets.
//!
//! The sink owns placement, directory creation and overwrite semantics.
//! Delivery failure is reported as data (a [`DeliveryReport`]), never as
//! an error: document generation success is reported independently of
//! upload success.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::assemble::OutputBundle;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Named-document sink (remote file store, local directory, ...)
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn put_document(&self, name: &str, contents: &str) -> Result<(), SinkError>;

    async fn put_asset(&self, name: &str, bytes: &[u8]) -> Result<(), SinkError>;
}

/// Filesystem sink: writes every document and asset under one directory
pub struct LocalDirSink {
    root: PathBuf,
}

impl LocalDirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSink for LocalDirSink {
    async fn put_document(&self, name: &str, contents: &str) -> Result<(), SinkError> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(name), contents).await?;
        Ok(())
    }

    async fn put_asset(&self, name: &str, bytes: &[u8]) -> Result<(), SinkError> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(name), bytes).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryFailure {
    pub name: String,
    pub reason: String,
}

/// Per-name outcome of one delivery pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeliveryReport {
    pub delivered: Vec<String>,
    pub failed: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Push a whole bundle through a sink, collecting per-name outcomes
pub async fn deliver_bundle(sink: &dyn DocumentSink, bundle: &OutputBundle) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for document in &bundle.documents {
        match sink.put_document(&document.name, &document.contents).await {
            Ok(()) => report.delivered.push(document.name.clone()),
            Err(e) => {
                tracing::warn!(name = %document.name, error = %e, "document delivery failed");
                report.failed.push(DeliveryFailure {
                    name: document.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    for asset in &bundle.assets {
        match sink.put_asset(&asset.name, &asset.bytes).await {
            Ok(()) => report.delivered.push(asset.name.clone()),
            Err(e) => {
                tracing::warn!(name = %asset.name, error = %e, "asset delivery failed");
                report.failed.push(DeliveryFailure {
                    name: asset.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
