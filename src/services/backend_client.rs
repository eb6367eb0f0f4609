// src/services/backend_client.rs
//! Thin JSON-over-HTTP client for the assistant backend and the relay.

use std::time::Duration;

use reqwest::Response;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::message::{BackendSummaryRequest, ChatRequest, RelaySummaryRequest};

/// Which query parameter a direct `/summary` lookup is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKey {
    ConversationId,
    PhoneNumber,
}

impl SummaryKey {
    pub fn query_param(self) -> &'static str {
        match self {
            SummaryKey::ConversationId => "conversationId",
            SummaryKey::PhoneNumber => "phoneNumber",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    inner: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            inner: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.url(path);
        debug!(url = %url, "POST request");
        let response = self.inner.post(&url).json(body).send().await?;
        Self::read_json(response, &url).await
    }

    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = self.url(path);
        debug!(url = %url, "GET request");
        let response = self.inner.get(&url).query(query).send().await?;
        Self::read_json(response, &url).await
    }

    async fn read_json(response: Response, url: &str) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Non-success response");
            return Err(AppError::BackendStatus(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    /// `POST /chat` on the backend.
    pub async fn chat(&self, request: &ChatRequest) -> Result<Value> {
        self.post_json("/chat", request).await
    }

    /// `POST /summary` on the backend, as the relay forwards it.
    pub async fn forward_summary(&self, conversation_id: &str) -> Result<Value> {
        let body = BackendSummaryRequest {
            conversation_id: conversation_id.to_string(),
        };
        self.post_json("/summary", &body).await
    }

    /// `GET /summary?<key>=<identifier>` on the backend.
    pub async fn lookup_summary(&self, key: SummaryKey, identifier: &str) -> Result<Value> {
        self.get_json("/summary", &[(key.query_param(), identifier)]).await
    }

    /// `POST /api/summary` on the relay.
    pub async fn relay_summary(&self, conversation_id: &str) -> Result<Value> {
        let body = RelaySummaryRequest {
            conversation_id: conversation_id.to_string(),
        };
        self.post_json("/api/summary", &body).await
    }
}
