//! Menu item normalization.
//!
//! Raw items arrive from the classifier (or manual entry) with loose
//! typing: prices as numbers or comma-decimal strings, descriptions as
//! text or a boolean false, French field names from older payloads.
//! Everything is coerced here, once, before placement; items that cannot
//! be priced or named are dropped, not raised.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price as delivered by the classifier: a JSON number, a string
/// (possibly with a comma decimal separator or a "-" placeholder), or
/// anything else we refuse to price
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Description on input: text, or the boolean-false sentinel some older
/// payload variants use for "no description"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDescription {
    Text(String),
    Flag(bool),
    Other(serde_json::Value),
}

/// One classified menu item as ingested, before normalization.
///
/// All fields are defaulted so any JSON object deserializes; payloads
/// whose list entries are not objects are rejected upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMenuItem {
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default, alias = "prix")]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub description: Option<RawDescription>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

/// A normalized item, ready for placement: resolved numeric price,
/// non-empty name, canonical "no description" as `None`
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub tax_rate: Option<Decimal>,
}

/// Normalize one raw item. `None` means the item is dropped (missing or
/// blank name, unpriceable or negative price); callers count drops.
pub fn normalize(raw: &RawMenuItem) -> Option<MenuItem> {
    let name = match raw.name.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return None,
    };

    let price = parse_price(raw.price.as_ref()?)?;
    if price.is_sign_negative() {
        return None;
    }

    let description = match &raw.description {
        Some(RawDescription::Text(text)) => {
            let text = text.trim();
            // A description repeating the name carries no information.
            if text.is_empty() || text == name {
                None
            } else {
                Some(text.to_string())
            }
        }
        _ => None,
    };

    let tax_rate = raw.tax_rate.and_then(|rate| Decimal::try_from(rate).ok());

    Some(MenuItem {
        name,
        price,
        description,
        tax_rate,
    })
}

/// Resolve a raw price to a decimal. Comma decimal separators are
/// substituted before parsing; the "-" placeholder and anything
/// non-numeric resolve to `None`.
fn parse_price(raw: &RawPrice) -> Option<Decimal> {
    match raw {
        RawPrice::Number(value) => Decimal::try_from(*value).ok(),
        RawPrice::Text(text) => {
            let text = text.trim();
            if text.is_empty() || text == "-" {
                return None;
            }
            Decimal::from_str(&text.replace(',', ".")).ok()
        }
        RawPrice::Other(_) => None,
    }
}
