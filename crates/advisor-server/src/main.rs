//! Investment AI HTTP Server
//!
//! Axum-based server hosting the compiled WASM page, plus a same-origin
//! proxy to the hosted completion endpoint.

mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::LlmProvider;
use advisor_runtime::A0Provider;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider = A0Provider::from_env();
    tracing::info!("Completion endpoint: {}", provider.endpoint());

    let provider: Arc<dyn LlmProvider> = Arc::new(provider);
    let state = AppState::new(provider);

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    let app = routes::router(state, &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Investment AI running on http://{}", addr);
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  POST /api/advice  - Ask for investment advice");
    tracing::info!("  GET  /*           - Page assets from {}", static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}
