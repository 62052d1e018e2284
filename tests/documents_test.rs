//! Service orchestration, wire shapes and delivery.

use std::sync::Arc;

use async_trait::async_trait;
use menugen::ai::{LlmClient, MenuClassifier};
use menugen::{
    DocumentVariant, GenerationRequest, GenerationService, LocalDirSink, MenuGenError, MenuSource,
    RestaurantProfile,
};
use serde_json::{json, Value};

/// Canned-reply client so the pipeline runs without a provider
struct MockLlmClient {
    reply: String,
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn chat_json(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

fn service_with_reply(reply: &str) -> GenerationService {
    GenerationService::new(MenuClassifier::new(Arc::new(MockLlmClient {
        reply: reply.to_string(),
    })))
}

fn manual_request(classification: Value) -> GenerationRequest {
    GenerationRequest::new(
        RestaurantProfile::new("Chez Mimi"),
        MenuSource::Manual(classification),
    )
}

#[tokio::test]
async fn text_source_runs_through_the_classifier() {
    let service = service_with_reply(
        "```json\n{\"plats\": [{\"name\": \"Burger\", \"price\": 15}]}\n```",
    );
    let request = GenerationRequest::new(
        RestaurantProfile::new("Chez Mimi"),
        MenuSource::Text("Burger 15€".to_string()),
    );
    let outcome = service.generate(request).await.unwrap();
    assert_eq!(outcome.bundle.documents.len(), 2);
    assert_eq!(outcome.stats.placed_items, 1);
}

#[tokio::test]
async fn manual_source_needs_no_classifier() {
    let service = GenerationService::without_classifier();
    let outcome = service
        .generate(manual_request(json!({
            "entrees": [{"name": "Soupe", "price": "8,50"}]
        })))
        .await
        .unwrap();
    assert_eq!(outcome.stats.placed_items, 1);
    assert!(outcome.delivery.is_none());
}

#[tokio::test]
async fn text_source_without_classifier_is_rejected() {
    let service = GenerationService::without_classifier();
    let request = GenerationRequest::new(
        RestaurantProfile::new("Chez Mimi"),
        MenuSource::Text("Burger 15€".to_string()),
    );
    assert!(matches!(
        service.generate(request).await,
        Err(MenuGenError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn empty_variant_list_is_rejected() {
    let service = GenerationService::without_classifier();
    let request = manual_request(json!({})).with_variants(Vec::new());
    assert!(matches!(
        service.generate(request).await,
        Err(MenuGenError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn malformed_manual_classification_is_rejected() {
    let service = GenerationService::without_classifier();
    let request = manual_request(json!(["not", "a", "mapping"]));
    assert!(matches!(
        service.generate(request).await,
        Err(MenuGenError::MalformedPayload { .. })
    ));
}

#[tokio::test]
async fn bundle_carries_both_default_variants() {
    let service = GenerationService::without_classifier();
    let outcome = service
        .generate(manual_request(json!({
            "plats": [{"name": "Burger", "price": 15}]
        })))
        .await
        .unwrap();

    let names: Vec<_> = outcome
        .bundle
        .documents
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, ["config.json", "menus.4.json"]);

    // Both variants wrap the same build: shared identifiers, v1 base.
    for document in &outcome.bundle.documents {
        let value: Value = serde_json::from_str(&document.contents).unwrap();
        assert_eq!(value["sections"][0]["articles"][0]["articleId"], "3000");
    }
}

#[tokio::test]
async fn single_v2_request_uses_base_4000() {
    let service = GenerationService::without_classifier();
    let outcome = service
        .generate(
            manual_request(json!({
                "plats": [{"name": "Burger", "price": 15}]
            }))
            .with_variants(vec![DocumentVariant::v2()]),
        )
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&outcome.bundle.documents[0].contents).unwrap();
    assert_eq!(value["sections"][0]["articles"][0]["articleId"], "4000");
}

#[tokio::test]
async fn delivery_writes_documents_and_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let sink = LocalDirSink::new(dir.path());
    let service = GenerationService::without_classifier();

    let outcome = service
        .generate_and_deliver(
            manual_request(json!({
                "plats": [{"name": "Burger", "price": 15}]
            })),
            &sink,
        )
        .await
        .unwrap();

    let report = outcome.delivery.unwrap();
    assert!(report.is_complete());
    assert_eq!(report.delivered, ["config.json", "menus.4.json"]);

    let written = std::fs::read_to_string(dir.path().join("menus.4.json")).unwrap();
    let value: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["sections"][0]["articles"][0]["posName"], "Burger");
}

#[tokio::test]
async fn classifier_gibberish_fails_generation_outright() {
    let service = service_with_reply("the menu looks tasty");
    let request = GenerationRequest::new(
        RestaurantProfile::new("Chez Mimi"),
        MenuSource::Text("Burger 15€".to_string()),
    );
    assert!(matches!(
        service.generate(request).await,
        Err(MenuGenError::MalformedPayload { .. })
    ));
}
