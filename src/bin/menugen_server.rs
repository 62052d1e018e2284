//! HTTP surface for the menu generation pipeline.
//!
//! Thin plumbing around [`menugen::GenerationService`]: request parsing,
//! variant selection and error mapping. No menu logic lives here.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use menugen::{
    ai::{client_from_config, MenuClassifier},
    AppConfig, DocumentVariant, GenerationOutcome, GenerationRequest, GenerationService,
    LocalDirSink, MenuGenError, MenuSource, RestaurantProfile,
};

// Application state
#[derive(Clone)]
struct AppState {
    service: Arc<GenerationService>,
    config: Arc<AppConfig>,
}

// API types
#[derive(Serialize, Deserialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize)]
struct GenerateBody {
    restaurant: RestaurantProfile,
    /// Category → items mapping, entered manually or replayed from a
    /// previous classification
    classification: serde_json::Value,
    #[serde(default)]
    variants: Option<Vec<String>>,
    #[serde(default)]
    deliver: bool,
}

#[derive(Deserialize)]
struct PdfQuery {
    name: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    deliver: bool,
}

#[derive(Serialize)]
struct DocumentSummary {
    name: String,
    contents: String,
}

#[derive(Serialize)]
struct GenerationSummary {
    request_id: String,
    generated_at: String,
    documents: Vec<DocumentSummary>,
    stats: menugen::BuildStats,
    delivery: Option<menugen::DeliveryReport>,
}

impl From<GenerationOutcome> for GenerationSummary {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            request_id: outcome.request_id.to_string(),
            generated_at: outcome.generated_at.to_rfc3339(),
            documents: outcome
                .bundle
                .documents
                .into_iter()
                .map(|d| DocumentSummary {
                    name: d.name,
                    contents: d.contents,
                })
                .collect(),
            stats: outcome.stats,
            delivery: outcome.delivery,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "menugen=info,tower_http=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Arc::new(AppConfig::from_env());

    // A server without LLM credentials still serves manual classifications
    let service = match client_from_config(&config) {
        Ok(llm) => GenerationService::new(MenuClassifier::new(llm)),
        Err(e) => {
            tracing::warn!(error = %e, "no LLM client; PDF and text sources disabled");
            GenerationService::without_classifier()
        }
    };

    let state = AppState {
        service: Arc::new(service),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/menus/generate", post(generate))
        .route("/api/menus/generate/pdf", post(generate_from_pdf))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::ok("OK".to_string()))
}

async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> (StatusCode, Json<ApiResponse<GenerationSummary>>) {
    let variants = match parse_variants(body.variants.as_deref()) {
        Ok(variants) => variants,
        Err(message) => return (StatusCode::BAD_REQUEST, Json(ApiResponse::err(message))),
    };

    let request = GenerationRequest::new(body.restaurant, MenuSource::Manual(body.classification))
        .with_variants(variants);

    run_generation(&state, request, body.deliver).await
}

async fn generate_from_pdf(
    State(state): State<AppState>,
    Query(query): Query<PdfQuery>,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse<GenerationSummary>>) {
    if body.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err("empty request body; expected PDF bytes")),
        );
    }

    let mut profile = RestaurantProfile::new(query.name);
    if let Some(address) = query.address {
        profile.address = address;
    }

    let request = GenerationRequest::new(profile, MenuSource::Pdf(body.to_vec()));
    run_generation(&state, request, query.deliver).await
}

async fn run_generation(
    state: &AppState,
    request: GenerationRequest,
    deliver: bool,
) -> (StatusCode, Json<ApiResponse<GenerationSummary>>) {
    let result = if deliver {
        let sink = LocalDirSink::new(state.config.output_dir.clone());
        state.service.generate_and_deliver(request, &sink).await
    } else {
        state.service.generate(request).await
    };

    match result {
        Ok(outcome) => (StatusCode::OK, Json(ApiResponse::ok(outcome.into()))),
        Err(e) => (error_status(&e), Json(ApiResponse::err(e.to_string()))),
    }
}

fn error_status(error: &MenuGenError) -> StatusCode {
    match error {
        MenuGenError::InvalidRequest(_) | MenuGenError::MalformedPayload { .. } => {
            StatusCode::BAD_REQUEST
        }
        MenuGenError::Classification(_) => StatusCode::BAD_GATEWAY,
        MenuGenError::PdfExtraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        MenuGenError::Serialization(_) | MenuGenError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn parse_variants(names: Option<&[String]>) -> Result<Vec<DocumentVariant>, String> {
    let Some(names) = names else {
        return Ok(vec![DocumentVariant::v1(), DocumentVariant::v2()]);
    };
    let mut variants = Vec::with_capacity(names.len());
    for name in names {
        match name.as_str() {
            "v1" => variants.push(DocumentVariant::v1()),
            "v2" => variants.push(DocumentVariant::v2()),
            other => return Err(format!("unknown document variant '{other}'")),
        }
    }
    if variants.is_empty() {
        return Err("variants list must not be empty".to_string());
    }
    Ok(variants)
}
