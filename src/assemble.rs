//! Document assembly.
//!
//! Wraps one canonical [`MenuDocument`] into the ordering platform's
//! fixed-schema output documents. Assembly never rebuilds: several
//! variants requested together re-wrap the same build and therefore
//! share article identifiers.
//!
//! Two schemas exist. V1 is the richer configuration document (restaurant
//! metadata embedded, indented output, boolean-false description
//! sentinel, identifier base 3000). V2 is the leaner menu document
//! (display flags only, compact separators, empty-string description
//! sentinel, identifier base 4000).

use serde_json::{json, Value};

use crate::config::RestaurantProfile;
use crate::error::Result;
use crate::menu::document::{Article, MenuDocument, Section, SectionBody};

/// How an absent description is written on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionMode {
    /// `"descr": {"fr": "", "en": ""}`
    EmptyString,
    /// `"descr": {"fr": false, "en": false}` (older payload variant)
    BooleanFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    V1,
    V2,
}

/// One output schema variant with its identifier base and description mode
#[derive(Debug, Clone, Copy)]
pub struct DocumentVariant {
    pub kind: VariantKind,
    pub id_base: u32,
    pub description_mode: DescriptionMode,
}

impl DocumentVariant {
    /// Richer configuration document
    pub fn v1() -> Self {
        Self {
            kind: VariantKind::V1,
            id_base: 3000,
            description_mode: DescriptionMode::BooleanFalse,
        }
    }

    /// Leaner menu document
    pub fn v2() -> Self {
        Self {
            kind: VariantKind::V2,
            id_base: 4000,
            description_mode: DescriptionMode::EmptyString,
        }
    }

    /// Override the identifier base (downstream systems may need
    /// non-overlapping ranges across documents generated in one run)
    pub fn with_id_base(mut self, id_base: u32) -> Self {
        self.id_base = id_base;
        self
    }

    pub fn with_description_mode(mut self, mode: DescriptionMode) -> Self {
        self.description_mode = mode;
        self
    }

    pub fn file_name(&self) -> &'static str {
        match self.kind {
            VariantKind::V1 => "config.json",
            VariantKind::V2 => "menus.4.json",
        }
    }
}

/// A finished, serialized output document
#[derive(Debug, Clone)]
pub struct NamedDocument {
    pub name: String,
    pub contents: String,
}

/// A binary asset delivered alongside the documents (banner images)
#[derive(Debug, Clone)]
pub struct NamedAsset {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Everything one generation run hands to the sink
#[derive(Debug, Clone, Default)]
pub struct OutputBundle {
    pub documents: Vec<NamedDocument>,
    pub assets: Vec<NamedAsset>,
}

fn bilingual_text(fr: &str, en: &str) -> Value {
    json!({ "fr": fr, "en": en })
}

fn render_article(article: &Article, mode: DescriptionMode) -> Value {
    let descr = match (&article.description, mode) {
        (Some(text), _) => bilingual_text(text, text),
        (None, DescriptionMode::EmptyString) => bilingual_text("", ""),
        (None, DescriptionMode::BooleanFalse) => json!({ "fr": false, "en": false }),
    };
    json!({
        "name": bilingual_text(&article.name.fr, &article.name.en),
        "articleId": article.article_id,
        "posName": article.pos_name,
        "price": { "priceId": "", "amount": article.price },
        "img": "",
        "descr": descr,
        "allergens": bilingual_text("", ""),
        "additional": bilingual_text("", ""),
        "wine_pairing": bilingual_text("", ""),
        "options": [],
        "defaultCourseId": article.course_id,
        "choicesForCourse": []
    })
}

fn render_section(section: &Section, mode: DescriptionMode) -> Value {
    let name = bilingual_text(&section.name.fr, &section.name.en);
    match &section.body {
        SectionBody::Articles(articles) => json!({
            "name": name,
            "articles": articles.iter().map(|a| render_article(a, mode)).collect::<Vec<_>>(),
        }),
        SectionBody::SubSections(subs) => json!({
            "name": name,
            "sections": subs
                .iter()
                .map(|sub| json!({
                    "name": bilingual_text(&sub.name.fr, &sub.name.en),
                    "articles": sub
                        .articles
                        .iter()
                        .map(|a| render_article(a, mode))
                        .collect::<Vec<_>>(),
                }))
                .collect::<Vec<_>>(),
        }),
    }
}

/// The menu substructure shared by both variants
fn menu_value(document: &MenuDocument, mode: DescriptionMode) -> Value {
    json!({
        "menus": [],
        "sections": document
            .food_sections
            .iter()
            .map(|s| render_section(s, mode))
            .collect::<Vec<_>>(),
        "drinks": document
            .drink_sections
            .iter()
            .map(|s| render_section(s, mode))
            .collect::<Vec<_>>(),
    })
}

fn v1_value(document: &MenuDocument, profile: &RestaurantProfile, mode: DescriptionMode) -> Value {
    let mut value = menu_value(document, mode);
    value["restaurant"] = json!({
        "name": profile.name,
        "address": profile.address,
        "colors": {
            "primary": profile.colors.primary,
            "secondary": profile.colors.secondary,
            "accent": profile.colors.accent,
        },
        "qrMode": profile.qr_mode,
        "banners": profile.banners,
    });
    value
}

fn v2_value(document: &MenuDocument, mode: DescriptionMode) -> Value {
    let mut value = menu_value(document, mode);
    value["display"] = json!({
        "currency": "EUR",
        "showImages": false,
        "showDescriptions": true,
    });
    value
}

/// Assemble one variant from an already-built document
pub fn assemble(
    document: &MenuDocument,
    profile: &RestaurantProfile,
    variant: &DocumentVariant,
) -> Result<NamedDocument> {
    let contents = match variant.kind {
        VariantKind::V1 => {
            let value = v1_value(document, profile, variant.description_mode);
            serde_json::to_string_pretty(&value)?
        }
        VariantKind::V2 => {
            let value = v2_value(document, variant.description_mode);
            serde_json::to_string(&value)?
        }
    };
    Ok(NamedDocument {
        name: variant.file_name().to_string(),
        contents,
    })
}

/// Assemble every requested variant plus the asset list into one bundle.
/// All variants wrap the same document, so their articles share ids.
pub fn assemble_bundle(
    document: &MenuDocument,
    profile: &RestaurantProfile,
    variants: &[DocumentVariant],
    assets: Vec<NamedAsset>,
) -> Result<OutputBundle> {
    let mut documents = Vec::with_capacity(variants.len());
    for variant in variants {
        documents.push(assemble(document, profile, variant)?);
    }
    Ok(OutputBundle { documents, assets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::builder::{build, BuildOptions};
    use crate::menu::ingest::parse_classification;

    fn sample_document() -> MenuDocument {
        let classification = parse_classification(
            r#"{"entrees": [{"name": "Soupe", "price": "8,50", "description": "Soupe"}]}"#,
        )
        .unwrap();
        build(&classification, &BuildOptions::with_id_base(4000)).document
    }

    #[test]
    fn test_article_wire_shape() {
        let document = sample_document();
        let value = menu_value(&document, DescriptionMode::EmptyString);
        let article = &value["sections"][0]["articles"][0];
        assert_eq!(article["articleId"], "4000");
        assert_eq!(article["posName"], "Soupe");
        assert_eq!(article["price"]["priceId"], "");
        assert_eq!(article["price"]["amount"], 8.5);
        assert_eq!(article["descr"]["fr"], "");
        assert_eq!(article["defaultCourseId"], 1);
        assert_eq!(article["options"], json!([]));
    }

    #[test]
    fn test_description_sentinel_in_both_modes() {
        let document = sample_document();
        let empty = menu_value(&document, DescriptionMode::EmptyString);
        assert_eq!(empty["sections"][0]["articles"][0]["descr"]["fr"], "");
        let falsey = menu_value(&document, DescriptionMode::BooleanFalse);
        assert_eq!(
            falsey["sections"][0]["articles"][0]["descr"]["fr"],
            Value::Bool(false)
        );
    }

    #[test]
    fn test_v1_embeds_restaurant_configuration() {
        let document = sample_document();
        let mut profile = RestaurantProfile::new("Chez Mimi");
        profile.address = "3 rue des Lilas, Lyon".to_string();
        let doc = assemble(&document, &profile, &DocumentVariant::v1()).unwrap();
        assert_eq!(doc.name, "config.json");
        // Configuration documents are indented for humans.
        assert!(doc.contents.contains('\n'));
        let value: Value = serde_json::from_str(&doc.contents).unwrap();
        assert_eq!(value["restaurant"]["name"], "Chez Mimi");
        assert_eq!(value["restaurant"]["qrMode"], "table");
    }

    #[test]
    fn test_v2_is_compact_with_display_flags() {
        let document = sample_document();
        let profile = RestaurantProfile::new("Chez Mimi");
        let doc = assemble(&document, &profile, &DocumentVariant::v2()).unwrap();
        assert_eq!(doc.name, "menus.4.json");
        assert!(!doc.contents.contains('\n'));
        let value: Value = serde_json::from_str(&doc.contents).unwrap();
        assert_eq!(value["display"]["currency"], "EUR");
        assert!(value.get("restaurant").is_none());
    }

    #[test]
    fn test_variants_share_identifiers_from_one_build() {
        let document = sample_document();
        let profile = RestaurantProfile::new("Chez Mimi");
        let bundle = assemble_bundle(
            &document,
            &profile,
            &[DocumentVariant::v1(), DocumentVariant::v2()],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(bundle.documents.len(), 2);
        for doc in &bundle.documents {
            let value: Value = serde_json::from_str(&doc.contents).unwrap();
            assert_eq!(value["sections"][0]["articles"][0]["articleId"], "4000");
        }
    }
}
