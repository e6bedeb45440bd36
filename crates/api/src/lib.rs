mod rate_limit;

use std::env;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use rplus_agents::SupportAgent;
use rplus_ai::Generator;
use rplus_catalog::CategoryCatalog;
use rplus_core::{Language, MessageInput, TurnOutcome};
use rplus_observability::AppMetrics;
use rplus_storage::MemoryStore;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::rate_limit::IpRateLimiter;

const MAX_MESSAGE_TEXT_LEN: usize = 4_000;

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<SupportAgent<Generator, MemoryStore>>,
    pub store: Arc<MemoryStore>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: String,
    pub limiter: IpRateLimiter,
    pub generation_enabled: bool,
    pub catalog_categories: usize,
    pub allowed_origins: Arc<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: rplus_observability::MetricsSnapshot,
    capabilities: HealthCapabilities,
}

#[derive(Debug, Serialize)]
struct HealthCapabilities {
    generation: bool,
    catalog_categories: usize,
    active_sessions: usize,
}

#[derive(Debug, Deserialize)]
struct MessageRequest {
    user_id: Option<String>,
    text: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    user_id: String,
    messages: Vec<String>,
    language: Language,
    outcome: TurnOutcome,
    awaiting_selection: bool,
}

/// Wire the whole surface from the environment: catalog document, generator
/// credentials, api key and rate limits.
pub async fn build_app(responses_path: impl AsRef<Path>) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let catalog = Arc::new(CategoryCatalog::from_path(responses_path));
    let generator = Arc::new(Generator::from_env());
    let store = Arc::new(MemoryStore::new());

    let generation_enabled = generator.is_enabled();
    let catalog_categories = catalog.len();

    let agent = Arc::new(SupportAgent::new(
        catalog,
        generator,
        store.clone(),
        metrics.clone(),
    ));

    let api_key = env::var("RPLUS_API_KEY").unwrap_or_else(|_| "dev-rplus-key".to_string());
    let rate_limit_window = Duration::from_secs(
        env::var("RPLUS_RATE_LIMIT_WINDOW_SECONDS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(60),
    );
    let rate_limit_max = env::var("RPLUS_RATE_LIMIT_MAX")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(80);
    let allowed_origins = parse_allowed_origins();

    let state = ApiState {
        agent,
        store,
        metrics,
        api_key,
        limiter: IpRateLimiter::new(rate_limit_window, rate_limit_max),
        generation_enabled,
        catalog_categories,
        allowed_origins: Arc::new(allowed_origins),
    };

    Ok(build_router(state))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/message", post(message))
        .layer(build_cors_layer(&state.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(16 * 1024))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
        capabilities: HealthCapabilities {
            generation: state.generation_enabled,
            catalog_categories: state.catalog_categories,
            active_sessions: state.store.session_count(),
        },
    })
}

async fn message(
    State(state): State<ApiState>,
    Json(request): Json<MessageRequest>,
) -> Response {
    let text = request.text.trim().to_string();
    if text.is_empty() || text.chars().count() > MAX_MESSAGE_TEXT_LEN {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "invalid_text",
                "message": "text must be non-empty and reasonably sized"
            })),
        )
            .into_response();
    }

    // Callers without a stable identity get a fresh session per request.
    let user_id = request
        .user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let reply = state
        .agent
        .handle_message(MessageInput {
            user_id: user_id.clone(),
            text,
        })
        .await;

    Json(MessageResponse {
        user_id,
        messages: reply.messages,
        language: reply.language,
        outcome: reply.outcome,
        awaiting_selection: reply.awaiting_selection,
    })
    .into_response()
}

fn is_public_endpoint(path: &str) -> bool {
    path == "/health"
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let header_key = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if header_key != state.api_key {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "unauthorized",
                "message": "missing or invalid x-api-key"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let ip = request_ip(request.headers());
    if !state.limiter.allow(&ip) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "rate_limited",
                "message": "rate limit exceeded for this IP"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

fn request_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|value| value.to_str().ok())
                .map(|value| value.trim().to_string())
        })
        .unwrap_or_else(|| "local".to_string())
}

fn parse_allowed_origins() -> Vec<String> {
    env::var("RPLUS_ALLOWED_ORIGINS")
        .ok()
        .map(|raw| {
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn build_cors_layer(allowed_origins: &Arc<Vec<String>>) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let origins = if origins.is_empty() {
        vec![HeaderValue::from_static("http://localhost:5500")]
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-api-key"),
        ])
}
