//! End-to-end properties of the classification → document pipeline.

use menugen::assemble::{self, DescriptionMode, DocumentVariant};
use menugen::menu::{
    build, parse_classification, BuildOptions, MenuDocument, SectionBody,
};
use menugen::RestaurantProfile;

fn all_article_ids(document: &MenuDocument) -> Vec<u32> {
    let mut ids = Vec::new();
    for section in document
        .food_sections
        .iter()
        .chain(document.drink_sections.iter())
    {
        match &section.body {
            SectionBody::Articles(articles) => {
                ids.extend(articles.iter().map(|a| a.article_id.parse::<u32>().unwrap()));
            }
            SectionBody::SubSections(subs) => {
                for sub in subs {
                    ids.extend(
                        sub.articles
                            .iter()
                            .map(|a| a.article_id.parse::<u32>().unwrap()),
                    );
                }
            }
        }
    }
    ids
}

const RICH_MENU: &str = r#"{
    "plats": [
        {"name": "Entrecôte", "price": "24,50"},
        {"name": "Burger", "price": 15},
        {"name": "Poisson du jour", "price": "-"}
    ],
    "entrees": [{"name": "Soupe", "price": 8}],
    "tapas": [{"name": "Patatas bravas", "price": 7}],
    "aperitifs": [{"name": "Kir", "price": 5}],
    "spritz": [{"name": "Spritz Aperol", "price": 9}],
    "rhums": [{"name": "Diplomatico", "price": 12}],
    "whiskies": [{"name": "Lagavulin 16", "price": 14}],
    "vins_rouges_bouteille": [
        {"name": "Châteauneuf-du-Pape", "price": 55},
        {"name": "Médoc", "price": 35},
        {"name": "Crozes-Hermitage", "price": 40}
    ],
    "vins_roses_bouteille": [{"name": "Minuty", "price": 32}],
    "boissons_soft": [{"name": "Limonade", "price": 4}],
    "jus": [{"name": "Jus d'abricot", "price": 4.5}],
    "desserts": []
}"#;

#[test]
fn determinism_across_runs() {
    let classification = parse_classification(RICH_MENU).unwrap();
    let first = build(&classification, &BuildOptions::with_id_base(4000));
    let second = build(&classification, &BuildOptions::with_id_base(4000));
    assert_eq!(
        serde_json::to_string(&first.document).unwrap(),
        serde_json::to_string(&second.document).unwrap()
    );
}

#[test]
fn identifiers_are_unique_and_strictly_increasing() {
    let classification = parse_classification(RICH_MENU).unwrap();
    let outcome = build(&classification, &BuildOptions::with_id_base(4000));
    let ids = all_article_ids(&outcome.document);
    assert!(!ids.is_empty());
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
    assert_eq!(ids[0], 4000);
}

#[test]
fn empty_category_emits_no_section() {
    let classification = parse_classification(RICH_MENU).unwrap();
    let outcome = build(&classification, &BuildOptions::default());
    assert!(outcome
        .document
        .food_sections
        .iter()
        .all(|s| s.name.fr != "DESSERTS"));
}

#[test]
fn dropped_items_never_reach_the_document() {
    let classification = parse_classification(RICH_MENU).unwrap();
    let outcome = build(&classification, &BuildOptions::default());
    // "Poisson du jour" has a placeholder price.
    let serialized = serde_json::to_string(&outcome.document).unwrap();
    assert!(!serialized.contains("Poisson du jour"));
    assert_eq!(outcome.stats.dropped_items, 1);
    // Surviving input items == placed articles.
    assert_eq!(outcome.document.article_count(), outcome.stats.placed_items);
    assert_eq!(outcome.document.article_count(), 14);
}

#[test]
fn region_precedence_first_listed_group_wins() {
    let classification = parse_classification(
        r#"{"vins_rouges_bouteille": [{"name": "Bourgogne Châteauneuf", "price": 45}]}"#,
    )
    .unwrap();
    let outcome = build(&classification, &BuildOptions::default());
    let section = &outcome.document.drink_sections[0];
    match &section.body {
        SectionBody::SubSections(subs) => assert_eq!(subs[0].name.fr, "LA BOURGOGNE"),
        SectionBody::Articles(_) => panic!("expected region sub-sections"),
    }
}

#[test]
fn merge_applies_with_one_side_empty() {
    let classification =
        parse_classification(r#"{"tapas": [{"name": "Patatas bravas", "price": 7}]}"#).unwrap();
    let outcome = build(&classification, &BuildOptions::default());
    assert_eq!(outcome.document.food_sections.len(), 1);
    assert_eq!(outcome.document.food_sections[0].name.fr, "SNACKING");
}

#[test]
fn description_sentinel_round_trips_in_both_modes() {
    // Description identical to the name is the "no description" sentinel.
    let classification = parse_classification(
        r#"{"plats": [{"name": "Burger", "price": 15, "description": "Burger"}]}"#,
    )
    .unwrap();
    let outcome = build(&classification, &BuildOptions::with_id_base(4000));
    let profile = RestaurantProfile::new("Chez Mimi");

    let v2 = assemble::assemble(&outcome.document, &profile, &DocumentVariant::v2()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&v2.contents).unwrap();
    assert_eq!(value["sections"][0]["articles"][0]["descr"]["fr"], "");

    let v1 = assemble::assemble(
        &outcome.document,
        &profile,
        &DocumentVariant::v1().with_description_mode(DescriptionMode::BooleanFalse),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&v1.contents).unwrap();
    assert_eq!(
        value["sections"][0]["articles"][0]["descr"]["fr"],
        serde_json::Value::Bool(false)
    );
}

#[test]
fn documented_scenario_entrees_and_red_bottle() {
    let classification = parse_classification(
        r#"{
            "entrees": [{"name": "Soupe", "price": "8,50"}],
            "vins_rouges_bouteille": [{"name": "Bordeaux Médoc", "price": 35}]
        }"#,
    )
    .unwrap();
    let outcome = build(&classification, &BuildOptions::with_id_base(4000));

    assert_eq!(outcome.document.food_sections.len(), 1);
    let entrees = &outcome.document.food_sections[0];
    assert_eq!(entrees.name.fr, "ENTRÉES");
    let soupe = match &entrees.body {
        SectionBody::Articles(articles) => &articles[0],
        _ => panic!("flat section expected"),
    };
    assert_eq!(soupe.article_id, "4000");
    assert_eq!(soupe.price, rust_decimal::Decimal::new(850, 2));

    assert_eq!(outcome.document.drink_sections.len(), 1);
    let reds = &outcome.document.drink_sections[0];
    assert_eq!(reds.name.fr, "BT VINS ROUGES");
    match &reds.body {
        SectionBody::SubSections(subs) => {
            assert_eq!(subs.len(), 1);
            assert_eq!(subs[0].name.fr, "BORDEAUX");
            assert_eq!(subs[0].articles[0].article_id, "4001");
            assert_eq!(subs[0].articles[0].price, rust_decimal::Decimal::new(35, 0));
        }
        SectionBody::Articles(_) => panic!("expected region sub-sections"),
    }
}
