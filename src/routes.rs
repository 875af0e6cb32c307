//! REST endpoints for the chat frontend.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::chat::ChatService;
use crate::error::ChatError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

/// Build the router with chat, mode, clear, status and health routes.
pub fn chat_routes(chat: Arc<ChatService>) -> Router {
    let state = AppState { chat };

    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat_handler))
        .route("/mode", post(set_mode))
        .route("/clear", post(clear))
        .route("/status", get(status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "sky-dost"
    }))
}

// ── Chat ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
    mode: Option<String>,
}

/// POST /chat
///
/// Returns `{"answer": ...}`. The provider that produced the answer is not
/// exposed.
async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    match state.chat.chat(&req.message, req.mode.as_deref()).await {
        Ok(answer) => (StatusCode::OK, Json(json!({ "answer": answer }))),
        Err(e @ ChatError::EmptyMessage) => {
            debug!("Rejected empty chat message");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

// ── Mode ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ModeRequest {
    mode: Option<String>,
}

/// POST /mode
async fn set_mode(
    State(state): State<AppState>,
    Json(req): Json<ModeRequest>,
) -> impl IntoResponse {
    let mode = state
        .chat
        .set_mode(req.mode.as_deref().unwrap_or("general"))
        .await;
    Json(json!({ "status": "success", "mode": mode }))
}

// ── Clear ───────────────────────────────────────────────────────────────

/// POST /clear
///
/// Clears the chat history and re-enables every provider.
async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    state.chat.clear().await;
    Json(json!({ "status": "success" }))
}

// ── Status ──────────────────────────────────────────────────────────────

/// GET /status
///
/// Per-provider credential/enabled flags plus an overall readiness summary.
async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let availability = state.chat.availability().await;

    let mut body = Map::new();
    for (id, entry) in &availability {
        body.insert(
            id.as_str().to_string(),
            json!({
                "available": entry.credential_present,
                "key_configured": entry.credential_present,
                "enabled": entry.enabled,
            }),
        );
    }

    let any_available = availability.values().any(|a| a.usable());
    body.insert("any_provider_available".to_string(), json!(any_available));
    let summary = if any_available {
        "AI Assistant Ready"
    } else {
        "Basic Mode"
    };
    body.insert("mode".to_string(), json!(summary));

    Json(Value::Object(body))
}
