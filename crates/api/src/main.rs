use std::env;

use anyhow::Result;
use rplus_api::build_app;
use rplus_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("rplus_api");

    let responses_path =
        env::var("RPLUS_RESPONSES_PATH").unwrap_or_else(|_| "data/responses.json".to_string());
    let bind = env::var("RPLUS_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = build_app(&responses_path).await?;

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, responses_path = %responses_path, "franchise concierge api started");

    axum::serve(listener, app).await?;
    Ok(())
}
