//! menugen: menu classification to point-of-sale configuration pipeline.
//!
//! Takes a restaurant menu (PDF bytes, free text, or a manually entered
//! classification), classifies it into a fixed category set via an LLM,
//! and deterministically transforms the result into the ordering
//! platform's fixed-schema configuration documents.
//!
//! ## Pipeline
//!
//! ```text
//! PDF/text -> classify (LLM) -> ingest -> normalize -> build -> assemble -> deliver
//! ```
//!
//! The transformation core (`menu`, `assemble`) is pure and synchronous;
//! all I/O lives at the boundaries (`ai`, `pdf`, `sink`).
//!
//! ## Quick start
//!
//! ```rust
//! use menugen::menu::{build, parse_classification, BuildOptions};
//!
//! let classification = parse_classification(
//!     r#"{"entrees": [{"name": "Soupe", "price": "8,50"}]}"#,
//! ).unwrap();
//! let outcome = build(&classification, &BuildOptions::with_id_base(4000));
//! assert_eq!(outcome.document.article_count(), 1);
//! ```

pub mod ai;
pub mod assemble;
pub mod config;
pub mod error;
pub mod menu;
pub mod pdf;
pub mod service;
pub mod sink;

pub use assemble::{DescriptionMode, DocumentVariant, NamedAsset, NamedDocument, OutputBundle};
pub use config::{AppConfig, RestaurantProfile};
pub use error::{MenuGenError, Result};
pub use menu::{build, parse_classification, BuildOptions, BuildStats, MenuDocument};
pub use service::{GenerationOutcome, GenerationRequest, GenerationService, MenuSource};
pub use sink::{DeliveryReport, DocumentSink, LocalDirSink};
