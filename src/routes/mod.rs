// src/routes/mod.rs
pub mod chat;
pub mod summary;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_relay_handler;
use summary::summary_relay_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_relay_handler))
        .route("/summary", post(summary_relay_handler));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
