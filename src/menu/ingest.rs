//! Classification payload ingestion.
//!
//! The upstream classifier returns a JSON mapping of category key to item
//! list, sometimes wrapped in a markdown code fence. The fence is
//! tolerated; anything that then fails to parse as a mapping of lists is
//! rejected with a descriptive error, never silently coerced.

use std::collections::BTreeMap;

use crate::error::{MenuGenError, Result};
use crate::menu::item::RawMenuItem;

/// Parsed classification: category key → items in input order.
///
/// A BTreeMap keeps key iteration deterministic; section order comes from
/// the catalog plan, not from here.
pub type ClassifiedMenu = BTreeMap<String, Vec<RawMenuItem>>;

/// Parse a classification payload from raw LLM (or manual) text
pub fn parse_classification(payload: &str) -> Result<ClassifiedMenu> {
    let cleaned = strip_code_fence(payload);
    serde_json::from_str(cleaned).map_err(|e| MenuGenError::MalformedPayload {
        reason: e.to_string(),
    })
}

/// Parse a classification already decoded as a JSON value (manual entry path)
pub fn classification_from_value(value: serde_json::Value) -> Result<ClassifiedMenu> {
    serde_json::from_value(value).map_err(|e| MenuGenError::MalformedPayload {
        reason: e.to_string(),
    })
}

/// Strip a surrounding ```json ... ``` (or bare ```) fence if present
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let inner = if text.contains("```json") {
        text.split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .unwrap_or(text)
    } else if text.contains("```") {
        text.split("```")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .unwrap_or(text)
    } else {
        text
    };
    inner.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_payload() {
        let parsed =
            parse_classification(r#"{"entrees": [{"name": "Soupe", "price": 8}]}"#).unwrap();
        assert_eq!(parsed["entrees"].len(), 1);
    }

    #[test]
    fn test_fenced_payload() {
        let payload = "```json\n{\"plats\": [{\"name\": \"Entrecôte\", \"price\": \"24,50\"}]}\n```";
        let parsed = parse_classification(payload).unwrap();
        assert_eq!(parsed["plats"].len(), 1);
    }

    #[test]
    fn test_bare_fence_payload() {
        let payload = "```\n{\"desserts\": []}\n```";
        let parsed = parse_classification(payload).unwrap();
        assert!(parsed["desserts"].is_empty());
    }

    #[test]
    fn test_non_mapping_payload_is_rejected() {
        assert!(matches!(
            parse_classification(r#"["entrees"]"#),
            Err(MenuGenError::MalformedPayload { .. })
        ));
        assert!(matches!(
            parse_classification("not json at all"),
            Err(MenuGenError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_list_of_non_objects_is_rejected() {
        assert!(matches!(
            parse_classification(r#"{"entrees": ["Soupe"]}"#),
            Err(MenuGenError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_item_order_is_preserved() {
        let parsed = parse_classification(
            r#"{"plats": [{"name": "A", "price": 1}, {"name": "B", "price": 2}, {"name": "C", "price": 3}]}"#,
        )
        .unwrap();
        let names: Vec<_> = parsed["plats"]
            .iter()
            .map(|i| i.name.clone().unwrap())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
