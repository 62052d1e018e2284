//! Core menu transformation pipeline.
//!
//! Data flows one direction:
//!
//! ```text
//! classification payload -> ingest -> normalize -> (region bucketing) -> builder -> MenuDocument
//! ```
//!
//! Everything in here is pure and synchronous; I/O lives in the `ai`,
//! `pdf` and `sink` modules.

pub mod builder;
pub mod catalog;
pub mod document;
pub mod ingest;
pub mod item;
pub mod regions;

pub use builder::{build, BuildOptions, BuildOutcome, BuildStats};
pub use document::{Article, Bilingual, MenuDocument, Section, SectionBody, SubSection};
pub use ingest::{classification_from_value, parse_classification, ClassifiedMenu};
pub use item::{normalize, MenuItem, RawMenuItem};
pub use regions::{KeywordRegionClassifier, RegionClassifier, WineColor};
