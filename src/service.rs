//! Generation service.
//!
//! Orchestrates one generation request end to end: resolve the menu
//! source to a classification (PDF → text → LLM, text → LLM, or a manual
//! mapping), build the canonical document once, assemble every requested
//! variant from that single build, and optionally deliver the bundle.
//!
//! Generation is all-or-nothing: the caller gets a complete bundle or an
//! error, never a partial document set.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ai::MenuClassifier;
use crate::assemble::{self, DocumentVariant, NamedAsset, OutputBundle};
use crate::config::RestaurantProfile;
use crate::error::{MenuGenError, Result};
use crate::menu::builder::{self, BuildOptions, BuildStats};
use crate::menu::ingest::{self, ClassifiedMenu};
use crate::pdf::{PdfTextExtractor, TextExtractor};
use crate::sink::{self, DeliveryReport, DocumentSink};

/// Where the menu comes from
pub enum MenuSource {
    /// Raw PDF bytes, extracted then classified
    Pdf(Vec<u8>),
    /// Free-form menu text, classified directly
    Text(String),
    /// A category → items mapping entered by hand (no LLM involved)
    Manual(serde_json::Value),
}

pub struct GenerationRequest {
    pub restaurant: RestaurantProfile,
    pub source: MenuSource,
    pub variants: Vec<DocumentVariant>,
    /// Banner images forwarded to the sink untouched
    pub assets: Vec<NamedAsset>,
}

impl GenerationRequest {
    pub fn new(restaurant: RestaurantProfile, source: MenuSource) -> Self {
        Self {
            restaurant,
            source,
            variants: vec![DocumentVariant::v1(), DocumentVariant::v2()],
            assets: Vec::new(),
        }
    }

    pub fn with_variants(mut self, variants: Vec<DocumentVariant>) -> Self {
        self.variants = variants;
        self
    }

    pub fn with_assets(mut self, assets: Vec<NamedAsset>) -> Self {
        self.assets = assets;
        self
    }
}

/// Result of one generation run
pub struct GenerationOutcome {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub bundle: OutputBundle,
    pub stats: BuildStats,
    /// Present only when delivery was requested; failures live inside
    pub delivery: Option<DeliveryReport>,
}

/// End-to-end menu generation orchestrator
pub struct GenerationService {
    classifier: Option<MenuClassifier>,
    extractor: Arc<dyn TextExtractor>,
}

impl GenerationService {
    /// Service with an LLM classifier and the default PDF extractor
    pub fn new(classifier: MenuClassifier) -> Self {
        Self {
            classifier: Some(classifier),
            extractor: Arc::new(PdfTextExtractor),
        }
    }

    /// Manual-entry-only service; PDF and text sources are rejected
    pub fn without_classifier() -> Self {
        Self {
            classifier: None,
            extractor: Arc::new(PdfTextExtractor),
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Run one generation request to a finished bundle
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutcome> {
        if request.variants.is_empty() {
            return Err(MenuGenError::InvalidRequest(
                "at least one document variant must be requested".to_string(),
            ));
        }
        if request.restaurant.name.trim().is_empty() {
            return Err(MenuGenError::InvalidRequest(
                "restaurant name is required".to_string(),
            ));
        }

        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, restaurant = %request.restaurant.name, "generation started");

        let classification = self.resolve_source(request.source).await?;

        // One build per request; every variant re-wraps it, so all
        // requested variants share the first variant's identifier base.
        let options = BuildOptions::with_id_base(request.variants[0].id_base);
        let outcome = builder::build(&classification, &options);

        let bundle = assemble::assemble_bundle(
            &outcome.document,
            &request.restaurant,
            &request.variants,
            request.assets,
        )?;

        tracing::info!(
            %request_id,
            documents = bundle.documents.len(),
            articles = outcome.document.article_count(),
            dropped = outcome.stats.dropped_items,
            "generation finished"
        );

        Ok(GenerationOutcome {
            request_id,
            generated_at: Utc::now(),
            bundle,
            stats: outcome.stats,
            delivery: None,
        })
    }

    /// Generate, then push the bundle through the sink. Delivery failures
    /// are reported in the outcome, not raised.
    pub async fn generate_and_deliver(
        &self,
        request: GenerationRequest,
        sink: &dyn DocumentSink,
    ) -> Result<GenerationOutcome> {
        let mut outcome = self.generate(request).await?;
        let report = sink::deliver_bundle(sink, &outcome.bundle).await;
        if !report.is_complete() {
            tracing::warn!(
                request_id = %outcome.request_id,
                failed = report.failed.len(),
                "bundle delivered with failures"
            );
        }
        outcome.delivery = Some(report);
        Ok(outcome)
    }

    async fn resolve_source(&self, source: MenuSource) -> Result<ClassifiedMenu> {
        match source {
            MenuSource::Manual(value) => ingest::classification_from_value(value),
            MenuSource::Text(text) => self.classify(&text).await,
            MenuSource::Pdf(bytes) => {
                let text = self.extractor.extract_text(&bytes)?;
                self.classify(&text).await
            }
        }
    }

    async fn classify(&self, text: &str) -> Result<ClassifiedMenu> {
        let Some(classifier) = &self.classifier else {
            return Err(MenuGenError::InvalidRequest(
                "no classifier configured; only manual classifications are accepted".to_string(),
            ));
        };
        classifier.classify(text).await
    }
}
