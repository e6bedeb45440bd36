use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use rplus_api::build_app;
use serde_json::json;
use tower::ServiceExt;

fn responses_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/responses.json")
}

/// Keep the suite hermetic: without a key the generator is disabled and
/// classification deterministically uses the fallback rules.
fn clear_generator_env() {
    std::env::remove_var("GEMINI_API_KEY");
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn message_request(user_id: &str, text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/message")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-rplus-key")
        .body(Body::from(
            json!({ "user_id": user_id, "text": text }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    clear_generator_env();
    let app = build_app(responses_path()).await.expect("app should build");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = body_json(response).await;
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["capabilities"]["generation"], false);
    assert_eq!(parsed["capabilities"]["catalog_categories"], 29);
}

#[tokio::test]
async fn message_requires_api_key() {
    clear_generator_env();
    let app = build_app(responses_path()).await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/message")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "user_id": "u1", "text": "what is RealtyPlus" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn message_answers_a_known_question() {
    clear_generator_env();
    let app = build_app(responses_path()).await.expect("app should build");

    let response = app
        .oneshot(message_request("it-user", "what is RealtyPlus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = body_json(response).await;
    assert_eq!(parsed["outcome"], "answered");
    assert_eq!(parsed["language"], "english");
    assert_eq!(parsed["awaiting_selection"], false);
    assert_eq!(parsed["messages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn disambiguation_round_trip_over_http() {
    clear_generator_env();
    let app = build_app(responses_path()).await.expect("app should build");

    let offered = app
        .clone()
        .oneshot(message_request("it-user-2", "marketing exclusivity brochure"))
        .await
        .unwrap();
    assert_eq!(offered.status(), StatusCode::OK);
    let offered = body_json(offered).await;
    assert_eq!(offered["outcome"], "suggestions_offered");
    assert_eq!(offered["awaiting_selection"], true);

    let resolved = app
        .oneshot(message_request("it-user-2", "2"))
        .await
        .unwrap();
    assert_eq!(resolved.status(), StatusCode::OK);
    let resolved = body_json(resolved).await;
    assert_eq!(resolved["outcome"], "answered");
    assert_eq!(resolved["awaiting_selection"], false);
    assert_eq!(resolved["messages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn blank_text_is_rejected() {
    clear_generator_env();
    let app = build_app(responses_path()).await.expect("app should build");

    let response = app
        .oneshot(message_request("it-user-3", "   "))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
