//! Canonical menu document model.
//!
//! One `MenuDocument` is built per generation request and every output
//! variant is derived from it by re-wrapping, never by rebuilding. The
//! types here are the internal representation; the platform wire shapes
//! live in the assembler.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A French/English display pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub fr: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
        }
    }

    /// Same text in both languages (item names are not translated)
    pub fn same(text: &str) -> Self {
        Self {
            fr: text.to_string(),
            en: text.to_string(),
        }
    }
}

/// The canonical output unit: one placed menu item.
///
/// Immutable once created by the section builder. `description` is `None`
/// for the "no description" sentinel; how that renders (empty string vs
/// boolean false) is decided per output variant at assembly time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub article_id: String,
    pub name: Bilingual,
    /// Raw item name as the POS terminal displays it
    pub pos_name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub tax_rate: Option<Decimal>,
    pub course_id: u32,
}

/// A named group of articles inside a split section (e.g. one wine region)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubSection {
    pub name: Bilingual,
    pub articles: Vec<Article>,
}

/// A section holds either articles directly or named sub-sections, never both
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SectionBody {
    Articles(Vec<Article>),
    SubSections(Vec<SubSection>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: Bilingual,
    pub body: SectionBody,
}

impl Section {
    pub fn article_count(&self) -> usize {
        match &self.body {
            SectionBody::Articles(articles) => articles.len(),
            SectionBody::SubSections(subs) => subs.iter().map(|s| s.articles.len()).sum(),
        }
    }
}

/// Top-level canonical document: ordered food and drink sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    pub food_sections: Vec<Section>,
    pub drink_sections: Vec<Section>,
}

impl MenuDocument {
    pub fn article_count(&self) -> usize {
        self.food_sections
            .iter()
            .chain(self.drink_sections.iter())
            .map(Section::article_count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.food_sections.is_empty() && self.drink_sections.is_empty()
    }
}

/// Monotonically increasing article identifier source.
///
/// Local to one build call; never shared between builds so concurrent
/// generations cannot interleave identifiers.
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new(base: u32) -> Self {
        Self { next: base }
    }

    /// Hand out the next identifier in string form
    pub fn allocate(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
