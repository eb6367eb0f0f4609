// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was empty or the request body could not be read.
    #[error("{0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Connection refused, reset, timed out, or an undecodable body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered, but not with a 2xx.
    #[error("backend returned HTTP {0}")]
    BackendStatus(u16),

    /// A 2xx body that does not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Transport(_) | AppError::BackendStatus(_) | AppError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Config(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("ID da conversa é obrigatório".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "ID da conversa é obrigatório");
    }

    #[test]
    fn backend_status_maps_to_bad_gateway() {
        assert_eq!(AppError::BackendStatus(404).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn malformed_response_is_not_a_client_error() {
        let err = AppError::MalformedResponse("expected an object".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
