// src/routes/summary.rs
use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::Local;
use tracing::{error, warn};

use crate::{
    error::AppError,
    message::RelaySummaryRequest,
    services::mock_summary::{demo_summary, unavailable_summary},
    state::SharedState,
};

pub const MISSING_ID_ERROR: &str = "ID da conversa é obrigatório";

/// Relay a summary request to the backend.
///
/// Apart from a missing id, this always answers 200: backend data when the
/// backend delivers, the demo summary when it answers non-2xx, and the
/// "unavailable" summary (carrying `error`) when the exchange fails outright.
pub async fn summary_relay_handler(State(state): State<SharedState>, body: Bytes) -> Response {
    let request: RelaySummaryRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "Unreadable summary request");
            return Json(unavailable_summary(Local::now())).into_response();
        }
    };

    let conversation_id = request.conversation_id.as_str();
    if conversation_id.is_empty() {
        return AppError::BadRequest(MISSING_ID_ERROR.to_string()).into_response();
    }

    match state.backend.forward_summary(conversation_id).await {
        Ok(data) => Json(data).into_response(),
        Err(AppError::BackendStatus(status)) => {
            warn!(status, conversation_id = %conversation_id, "Backend has no summary, serving demo data");
            Json(demo_summary(conversation_id, Local::now())).into_response()
        }
        Err(e) => {
            error!(error = %e, "Error generating summary");
            Json(unavailable_summary(Local::now())).into_response()
        }
    }
}
