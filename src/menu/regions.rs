//! Wine region bucketing.
//!
//! Bottled wines are split into region sub-sections by substring matching
//! on the lower-cased item name. The keyword groups are ordered; the first
//! group with a hit wins, and names matching nothing land in the catch-all
//! bucket. Rosé bottles carry no keyword test at all: they always land in
//! Provence.
//!
//! The heuristic is deliberately fuzzy, so it sits behind the
//! [`RegionClassifier`] trait and alternate rules can be swapped in
//! without touching the section builder.

/// Wine color, selecting which rule set applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WineColor {
    White,
    Red,
    Rose,
}

/// Ordered keyword groups plus a catch-all bucket
pub struct RegionRules {
    groups: &'static [(&'static [&'static str], &'static str)],
    fallback: &'static str,
}

impl RegionRules {
    /// First matching group wins; no match falls through to the catch-all
    pub fn bucket(&self, name: &str) -> &'static str {
        let lowered = name.to_lowercase();
        self.groups
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
            .map(|(_, bucket)| *bucket)
            .unwrap_or(self.fallback)
    }
}

pub static WHITE_RULES: RegionRules = RegionRules {
    groups: &[
        (&["languedoc", "viognier"], "LE LANGUEDOC"),
        (&["bourgogne", "chablis", "beaune"], "LA BOURGOGNE"),
        (&["loire", "sancerre", "pouilly"], "LA LOIRE"),
        (&["rhône", "condrieu"], "LE RHÔNE"),
    ],
    fallback: "AUTRES",
};

pub static RED_RULES: RegionRules = RegionRules {
    groups: &[
        (&["bourgogne", "gevrey", "mercurey", "beaune"], "LA BOURGOGNE"),
        (&["rhône", "châteauneuf", "crozes", "vacqueras"], "LE RHÔNE"),
        (&["bordeaux", "médoc", "saint-julien", "morgon"], "BORDEAUX"),
    ],
    fallback: "AUTRES",
};

// Rosé bottles are all Provence, whatever the name says.
pub static ROSE_RULES: RegionRules = RegionRules {
    groups: &[],
    fallback: "La PROVENCE",
};

/// Pluggable name → region bucket strategy
pub trait RegionClassifier: Send + Sync {
    fn bucket(&self, color: WineColor, name: &str) -> String;
}

/// Default classifier backed by the static keyword rules
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordRegionClassifier;

impl RegionClassifier for KeywordRegionClassifier {
    fn bucket(&self, color: WineColor, name: &str) -> String {
        let rules = match color {
            WineColor::White => &WHITE_RULES,
            WineColor::Red => &RED_RULES,
            WineColor::Rose => &ROSE_RULES,
        };
        rules.bucket(name).to_string()
    }
}
