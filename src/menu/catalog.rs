//! Static category catalog.
//!
//! Authoritative table for everything category-related: the recognized
//! category keys, their per-key descriptors (target document, bilingual
//! display name, tax/course metadata) and the ordered section plan the
//! builder walks. The plan's declaration order IS the output section
//! order, and multi-key plan entries are the merge groups (e.g. planches
//! and tapas share one SNACKING section).
//!
//! Loaded once, immutable for the process lifetime.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::menu::regions::WineColor;

/// Which output document a category lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDocument {
    Food,
    Drinks,
}

/// French VAT class for on-site consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxClass {
    /// 10%: food and non-alcoholic drinks
    Reduced,
    /// 20%: alcohol
    Standard,
}

impl TaxClass {
    pub fn rate(self) -> Decimal {
        match self {
            TaxClass::Reduced => Decimal::new(10, 0),
            TaxClass::Standard => Decimal::new(20, 0),
        }
    }
}

/// Catalog entry for one category key
#[derive(Debug, Clone, Copy)]
pub struct CategoryDescriptor {
    pub key: &'static str,
    pub target: TargetDocument,
    pub display_fr: &'static str,
    pub display_en: &'static str,
    pub numeric_id: Option<u32>,
    pub tax_class: Option<TaxClass>,
    pub course_id: Option<u32>,
}

const fn desc(
    key: &'static str,
    target: TargetDocument,
    display_fr: &'static str,
    display_en: &'static str,
    numeric_id: u32,
    tax_class: TaxClass,
    course_id: Option<u32>,
) -> CategoryDescriptor {
    CategoryDescriptor {
        key,
        target,
        display_fr,
        display_en,
        numeric_id: Some(numeric_id),
        tax_class: Some(tax_class),
        course_id,
    }
}

use TargetDocument::{Drinks, Food};
use TaxClass::{Reduced, Standard};

/// Every recognized category key. Merged partners share their section's
/// display name, so a section is always named after its first member.
pub static DESCRIPTORS: &[CategoryDescriptor] = &[
    // Food
    desc("planches", Food, "SNACKING", "SNACKING", 101, Reduced, Some(1)),
    desc("tapas", Food, "SNACKING", "SNACKING", 102, Reduced, Some(1)),
    desc("entrees", Food, "ENTRÉES", "STARTERS", 103, Reduced, Some(1)),
    desc("salades", Food, "SALADES", "SALADS", 104, Reduced, Some(1)),
    desc("plats", Food, "PLATS", "MAINS", 105, Reduced, Some(1)),
    desc("desserts", Food, "DESSERTS", "DESSERTS", 106, Reduced, Some(2)),
    desc("pinsa_pizza", Food, "PINSA & PIZZA", "PINSA & PIZZA", 107, Reduced, Some(1)),
    desc("pates", Food, "PÂTES", "PASTA", 108, Reduced, Some(1)),
    // Drinks
    desc("cocktails", Drinks, "COCKTAILS", "COCKTAILS", 201, Standard, None),
    desc("mocktails", Drinks, "MOCKTAILS", "MOCKTAILS", 202, Reduced, None),
    desc("aperitifs", Drinks, "APÉRITIFS", "APERITIFS", 203, Standard, None),
    desc("spritz", Drinks, "APÉRITIFS", "APERITIFS", 204, Standard, None),
    desc("bieres_pression", Drinks, "BIÈRES", "BEERS", 205, Standard, None),
    desc("bieres_bouteilles", Drinks, "BIÈRES", "BEERS", 206, Standard, None),
    desc("boissons_soft", Drinks, "SOFTS-EAUX", "SOFT DRINKS", 207, Reduced, None),
    desc("jus", Drinks, "SOFTS-EAUX", "SOFT DRINKS", 208, Reduced, None),
    desc("boissons_chaudes", Drinks, "CAFÉTERIE", "CAFE", 209, Reduced, None),
    desc("vins_blancs_verre", Drinks, "VINS VERRE BLANCS", "WHITE WINES GLASS", 210, Standard, None),
    desc("vins_rouges_verre", Drinks, "VINS VERRE ROUGES", "RED WINES GLASS", 211, Standard, None),
    desc("vins_roses_verre", Drinks, "VINS VERRE ROSÉS", "ROSÉ WINES GLASS", 212, Standard, None),
    desc("champagnes_coupe", Drinks, "CHAMPAGNES BLANCS", "CHAMPAGNES WHITE", 213, Standard, None),
    desc("champagnes_bouteille", Drinks, "CHAMPAGNES BLANCS", "CHAMPAGNES WHITE", 214, Standard, None),
    desc("champagnes_magnum", Drinks, "CHAMPAGNES ROSÉ", "CHAMPAGNES ROSÉ", 215, Standard, None),
    desc("rhums", Drinks, "ALCOOLS", "SPIRITS", 216, Standard, None),
    desc("vodkas", Drinks, "ALCOOLS", "SPIRITS", 217, Standard, None),
    desc("gins", Drinks, "ALCOOLS", "SPIRITS", 218, Standard, None),
    desc("tequilas", Drinks, "ALCOOLS", "SPIRITS", 219, Standard, None),
    desc("whiskies", Drinks, "ALCOOLS", "SPIRITS", 220, Standard, None),
    desc("digestifs", Drinks, "ALCOOLS", "SPIRITS", 221, Standard, None),
    desc("cognacs_armagnacs", Drinks, "ALCOOLS", "SPIRITS", 222, Standard, None),
    desc("vins_blancs_bouteille", Drinks, "BT VINS BLANCS", "WHITE WINES BOTTLE", 223, Standard, None),
    desc("vins_roses_bouteille", Drinks, "BT VINS ROSÉS", "ROSÉ WINES BOTTLE", 224, Standard, None),
    desc("vins_rouges_bouteille", Drinks, "BT VINS ROUGES", "RED WINES BOTTLE", 225, Standard, None),
];

static BY_KEY: Lazy<HashMap<&'static str, &'static CategoryDescriptor>> =
    Lazy::new(|| DESCRIPTORS.iter().map(|d| (d.key, d)).collect());

/// Pure, total lookup. Unknown keys return `None`; callers skip the
/// category and log the occurrence.
pub fn lookup(key: &str) -> Option<&'static CategoryDescriptor> {
    BY_KEY.get(key).copied()
}

/// All recognized keys in catalog order (used to build the classifier prompt)
pub fn category_keys() -> impl Iterator<Item = &'static str> {
    DESCRIPTORS.iter().map(|d| d.key)
}

/// How a section arranges its articles
#[derive(Debug, Clone, Copy)]
pub enum SectionLayout {
    /// Articles directly under the section
    Flat,
    /// One fixed-label sub-section per member key (beers: Pression / Bouteilles)
    Labelled(&'static [(&'static str, &'static str, &'static str)]),
    /// Region sub-sections derived from item names
    Regions(WineColor),
}

/// One entry of the section plan: the member keys (merge group when more
/// than one), the target document and the layout
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub keys: &'static [&'static str],
    pub target: TargetDocument,
    pub layout: SectionLayout,
}

impl SectionSpec {
    /// Section display name: the first member's catalog display name
    pub fn display(&self) -> (&'static str, &'static str) {
        match lookup(self.keys[0]) {
            Some(d) => (d.display_fr, d.display_en),
            None => (self.keys[0], self.keys[0]),
        }
    }
}

const fn flat(keys: &'static [&'static str], target: TargetDocument) -> SectionSpec {
    SectionSpec {
        keys,
        target,
        layout: SectionLayout::Flat,
    }
}

/// Declaration order here fixes the output order of sections.
pub static SECTION_PLAN: &[SectionSpec] = &[
    // Food
    flat(&["planches", "tapas"], Food),
    flat(&["entrees"], Food),
    flat(&["salades"], Food),
    flat(&["plats"], Food),
    flat(&["desserts"], Food),
    flat(&["pinsa_pizza"], Food),
    flat(&["pates"], Food),
    // Drinks
    flat(&["cocktails"], Drinks),
    flat(&["mocktails"], Drinks),
    flat(&["aperitifs", "spritz"], Drinks),
    SectionSpec {
        keys: &["bieres_pression", "bieres_bouteilles"],
        target: Drinks,
        layout: SectionLayout::Labelled(&[
            ("bieres_pression", "Pression", "Pression"),
            ("bieres_bouteilles", "Bouteilles", "Bouteilles"),
        ]),
    },
    flat(&["boissons_soft", "jus"], Drinks),
    flat(&["boissons_chaudes"], Drinks),
    flat(&["vins_blancs_verre"], Drinks),
    flat(&["vins_rouges_verre"], Drinks),
    flat(&["vins_roses_verre"], Drinks),
    flat(&["champagnes_coupe", "champagnes_bouteille"], Drinks),
    flat(&["champagnes_magnum"], Drinks),
    flat(
        &[
            "rhums",
            "vodkas",
            "gins",
            "tequilas",
            "whiskies",
            "digestifs",
            "cognacs_armagnacs",
        ],
        Drinks,
    ),
    SectionSpec {
        keys: &["vins_blancs_bouteille"],
        target: Drinks,
        layout: SectionLayout::Regions(WineColor::White),
    },
    SectionSpec {
        keys: &["vins_roses_bouteille"],
        target: Drinks,
        layout: SectionLayout::Regions(WineColor::Rose),
    },
    SectionSpec {
        keys: &["vins_rouges_bouteille"],
        target: Drinks,
        layout: SectionLayout::Regions(WineColor::Red),
    },
];
