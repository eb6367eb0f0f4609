// src/routes/chat.rs
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::{error::AppError, message::ChatRequest, state::SharedState};

pub const RELAY_CHAT_ERROR: &str = "Erro interno do servidor";

/// Forward a chat message to the backend and pass its JSON straight back.
pub async fn chat_relay_handler(State(state): State<SharedState>, body: Bytes) -> Response {
    match relay_chat(&state, &body).await {
        Ok(reply) => Json(reply).into_response(),
        Err(e) => {
            error!(error = %e, "Error in chat relay");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": RELAY_CHAT_ERROR })),
            )
                .into_response()
        }
    }
}

async fn relay_chat(state: &SharedState, body: &[u8]) -> Result<serde_json::Value, AppError> {
    let payload: ChatRequest = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("invalid chat body: {}", e)))?;
    state.backend.chat(&payload).await
}
