//! Section builder.
//!
//! Walks the catalog's section plan in declaration order, normalizes and
//! places every surviving item, and allocates article identifiers as
//! items are placed. One `build` call owns its allocator, so identifier
//! assignment is reproducible and never interleaves across concurrent
//! generations.

use std::sync::Arc;

use serde::Serialize;

use crate::menu::catalog::{self, CategoryDescriptor, SectionLayout, SectionSpec, TargetDocument};
use crate::menu::document::{
    Article, Bilingual, IdAllocator, MenuDocument, Section, SectionBody, SubSection,
};
use crate::menu::ingest::ClassifiedMenu;
use crate::menu::item::{self, MenuItem};
use crate::menu::regions::{KeywordRegionClassifier, RegionClassifier, WineColor};

/// Build-time knobs: identifier base (varies per document variant) and the
/// wine region strategy
#[derive(Clone)]
pub struct BuildOptions {
    pub id_base: u32,
    pub regions: Arc<dyn RegionClassifier>,
}

impl BuildOptions {
    pub fn with_id_base(id_base: u32) -> Self {
        Self {
            id_base,
            regions: Arc::new(KeywordRegionClassifier),
        }
    }

    pub fn with_region_classifier(mut self, regions: Arc<dyn RegionClassifier>) -> Self {
        self.regions = regions;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::with_id_base(4000)
    }
}

/// Counters reported alongside the document; item defects are data here,
/// never errors
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildStats {
    pub placed_items: usize,
    pub dropped_items: usize,
    pub unknown_categories: Vec<String>,
}

/// A finished build: the canonical document plus its counters
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub document: MenuDocument,
    pub stats: BuildStats,
}

/// Build the canonical menu document from a parsed classification.
///
/// Empty categories are omitted entirely; unknown categories are skipped
/// with a warning and reported in the stats.
pub fn build(classification: &ClassifiedMenu, options: &BuildOptions) -> BuildOutcome {
    let mut ids = IdAllocator::new(options.id_base);
    let mut stats = BuildStats::default();
    let mut document = MenuDocument::default();

    for key in classification.keys() {
        if catalog::lookup(key).is_none() {
            tracing::warn!(category = %key, "skipping unknown menu category");
            stats.unknown_categories.push(key.clone());
        }
    }

    for spec in catalog::SECTION_PLAN {
        let section = match spec.layout {
            SectionLayout::Flat => build_flat(spec, classification, &mut ids, &mut stats),
            SectionLayout::Labelled(labels) => {
                build_labelled(spec, labels, classification, &mut ids, &mut stats)
            }
            SectionLayout::Regions(color) => build_regions(
                spec,
                color,
                options.regions.as_ref(),
                classification,
                &mut ids,
                &mut stats,
            ),
        };
        if let Some(section) = section {
            match spec.target {
                TargetDocument::Food => document.food_sections.push(section),
                TargetDocument::Drinks => document.drink_sections.push(section),
            }
        }
    }

    tracing::info!(
        placed = stats.placed_items,
        dropped = stats.dropped_items,
        food_sections = document.food_sections.len(),
        drink_sections = document.drink_sections.len(),
        "menu document built"
    );

    BuildOutcome { document, stats }
}

/// Normalize a category's items, counting drops; input order is preserved
fn surviving_items(
    classification: &ClassifiedMenu,
    key: &str,
    stats: &mut BuildStats,
) -> Vec<MenuItem> {
    let Some(raw_items) = classification.get(key) else {
        return Vec::new();
    };
    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        match item::normalize(raw) {
            Some(item) => items.push(item),
            None => {
                stats.dropped_items += 1;
                tracing::debug!(category = %key, "dropping item without usable name or price");
            }
        }
    }
    items
}

fn to_article(item: MenuItem, descriptor: &CategoryDescriptor, ids: &mut IdAllocator) -> Article {
    Article {
        article_id: ids.allocate(),
        name: Bilingual::same(&item.name),
        pos_name: item.name,
        price: item.price,
        description: item.description,
        tax_rate: item
            .tax_rate
            .or_else(|| descriptor.tax_class.map(|t| t.rate())),
        course_id: descriptor.course_id.unwrap_or(1),
    }
}

fn section_name(spec: &SectionSpec) -> Bilingual {
    let (fr, en) = spec.display();
    Bilingual::new(fr, en)
}

/// Flat section over one or more (merged) categories
fn build_flat(
    spec: &SectionSpec,
    classification: &ClassifiedMenu,
    ids: &mut IdAllocator,
    stats: &mut BuildStats,
) -> Option<Section> {
    let mut articles = Vec::new();
    for key in spec.keys.iter().copied() {
        let Some(descriptor) = catalog::lookup(key) else {
            continue;
        };
        for item in surviving_items(classification, key, stats) {
            articles.push(to_article(item, descriptor, ids));
        }
    }
    if articles.is_empty() {
        return None;
    }
    stats.placed_items += articles.len();
    Some(Section {
        name: section_name(spec),
        body: SectionBody::Articles(articles),
    })
}

/// Fixed-label sub-sections, one per member key (beers)
fn build_labelled(
    spec: &SectionSpec,
    labels: &[(&'static str, &'static str, &'static str)],
    classification: &ClassifiedMenu,
    ids: &mut IdAllocator,
    stats: &mut BuildStats,
) -> Option<Section> {
    let mut subsections = Vec::new();
    for (key, label_fr, label_en) in labels.iter().copied() {
        let Some(descriptor) = catalog::lookup(key) else {
            continue;
        };
        let items = surviving_items(classification, key, stats);
        if items.is_empty() {
            continue;
        }
        let articles: Vec<Article> = items
            .into_iter()
            .map(|item| to_article(item, descriptor, ids))
            .collect();
        stats.placed_items += articles.len();
        subsections.push(SubSection {
            name: Bilingual::new(label_fr, label_en),
            articles,
        });
    }
    if subsections.is_empty() {
        return None;
    }
    Some(Section {
        name: section_name(spec),
        body: SectionBody::SubSections(subsections),
    })
}

/// Region sub-sections for bottled wines. Buckets appear in the order
/// their first item is encountered; identifiers are allocated in emitted
/// document order, with input order preserved inside each bucket.
fn build_regions(
    spec: &SectionSpec,
    color: WineColor,
    classifier: &dyn RegionClassifier,
    classification: &ClassifiedMenu,
    ids: &mut IdAllocator,
    stats: &mut BuildStats,
) -> Option<Section> {
    let key = spec.keys[0];
    let descriptor = catalog::lookup(key)?;
    let items = surviving_items(classification, key, stats);
    if items.is_empty() {
        return None;
    }

    let mut buckets: Vec<(String, Vec<MenuItem>)> = Vec::new();
    for item in items {
        let bucket = classifier.bucket(color, &item.name);
        match buckets.iter_mut().find(|(name, _)| *name == bucket) {
            Some((_, group)) => group.push(item),
            None => buckets.push((bucket, vec![item])),
        }
    }

    let mut subsections = Vec::new();
    for (bucket, group) in buckets {
        let articles: Vec<Article> = group
            .into_iter()
            .map(|item| to_article(item, descriptor, ids))
            .collect();
        stats.placed_items += articles.len();
        subsections.push(SubSection {
            name: Bilingual::same(&bucket),
            articles,
        });
    }

    Some(Section {
        name: section_name(spec),
        body: SectionBody::SubSections(subsections),
    })
}
