//! HTTP handlers for the template and chat endpoints.
//!
//! Failures are mapped here and nowhere else: an unrecognized
//! classification is a client-visible 400 carrying the raw model text;
//! upstream generation failures are logged and collapsed to the generic
//! 500 bodies so no internal detail leaks.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Value, json};
use tracing::error;

use super::AppState;
use super::types::{
    ChatRequest, ChatResponse, TemplateErrorBody, TemplateRequest, TemplateResponse,
};
use crate::chat;
use crate::llm::Turn;
use crate::template::{self, TemplateError};

/// Health check and status endpoint
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.model,
    }))
}

pub async fn template_handler(
    State(state): State<AppState>,
    Json(request): Json<TemplateRequest>,
) -> Response {
    match template::resolve(state.generator.as_ref(), &request.prompt).await {
        Ok(bundle) => Json(TemplateResponse::from(bundle)).into_response(),
        Err(TemplateError::Unrecognized { model_response }) => (
            StatusCode::BAD_REQUEST,
            Json(TemplateErrorBody {
                error: "Unrecognized model response".to_string(),
                model_response,
            }),
        )
            .into_response(),
        Err(TemplateError::Generation(err)) => {
            error!("Error generating response: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error generating content.").into_response()
        }
    }
}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let history: Vec<Turn> = request.messages.into_iter().map(Turn::from).collect();

    match chat::relay(state.generator.as_ref(), history).await {
        Ok(response) => Json(ChatResponse { response }).into_response(),
        Err(err) => {
            error!("Error in /chat: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error generating response").into_response()
        }
    }
}
