//! HTTP server wiring.
//!
//! Routes:
//! - POST /template - classify a prompt, return the boilerplate bundle
//! - POST /chat - relay a conversation, return the model reply verbatim
//! - GET /status - health check

mod handlers;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::llm::{GeminiClient, Generator};

/// Whole-request ceiling. Generous: a full scaffold reply can stream for a
/// long time, but no request may hang forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// The only state shared across requests; immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn Generator>,
    pub model: String,
}

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/template", post(handlers::template_handler))
        .route("/chat", post(handlers::chat_handler))
        .route("/status", get(handlers::status_handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let state = AppState {
        generator: Arc::new(GeminiClient::from_config(&config)),
        model: config.gemini_model.clone(),
    };

    let app = create_router(state);
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
