// src/services/chat_session.rs
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::Result;
use crate::message::{ChatReply, ChatRequest};
use crate::services::backend_client::BackendClient;
use crate::services::extract::{REPLY_STRATEGIES, echoed_phone_number, first_populated};

pub const FALLBACK_REPLY: &str = "Desculpe, não consegui processar sua mensagem. Tente novamente.";

pub const CONNECTIVITY_ERROR: &str = "Desculpe, ocorreu um erro ao processar sua mensagem. \
Verifique se o servidor está funcionando e tente novamente.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    fn new(prefix: &str, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: format!("{}_{}", prefix, Uuid::new_v4()),
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty text, empty phone number, a call already in flight, or no call
    /// pending on completion. Nothing changed.
    Rejected,
    Replied,
    /// The backend was unreachable or answered non-2xx; an error bubble was appended.
    Failed,
}

/// Turn a successful `/chat` body into the reply the user sees.
pub fn interpret_reply(body: &Value) -> ChatReply {
    ChatReply {
        content: first_populated(body, REPLY_STRATEGIES).unwrap_or_else(|| FALLBACK_REPLY.to_string()),
        phone_number: echoed_phone_number(body),
    }
}

/// Client-held chat state for one active conversation.
///
/// Messages are append-only. At most one backend call may be outstanding.
#[derive(Debug)]
pub struct ChatSession {
    client: BackendClient,
    messages: Vec<Message>,
    input: String,
    loading: bool,
    phone_number: String,
}

impl ChatSession {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            messages: Vec::new(),
            input: String::new(),
            loading: false,
            phone_number: String::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }

    /// Whether a submit with the current buffers would be accepted.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty() && !self.phone_number.trim().is_empty()
    }

    /// Validate, append the user message and mark the session as loading.
    ///
    /// Returns the request to send, or `None` when the submit is refused.
    pub fn begin_submit(&mut self, text: &str, phone_number: &str) -> Option<ChatRequest> {
        let text = text.trim();
        let phone_number = phone_number.trim();
        if text.is_empty() || phone_number.is_empty() || self.loading {
            return None;
        }

        self.messages.push(Message::new("user", MessageRole::User, text));
        self.input.clear();
        self.phone_number = phone_number.to_string();
        self.loading = true;

        Some(ChatRequest {
            message: text.to_string(),
            phone_number: Some(phone_number.to_string()),
            conversation_id: None,
        })
    }

    /// Apply the backend outcome: exactly one assistant message, then loading is cleared.
    ///
    /// Without a pending `begin_submit` the outcome is dropped and nothing is appended.
    pub fn complete_submit(&mut self, outcome: Result<Value>) -> SubmitOutcome {
        if !self.loading {
            return SubmitOutcome::Rejected;
        }
        let result = match outcome {
            Ok(body) => {
                let reply = interpret_reply(&body);
                if let Some(phone_number) = reply.phone_number {
                    self.phone_number = phone_number;
                }
                self.messages
                    .push(Message::new("assistant", MessageRole::Assistant, reply.content));
                SubmitOutcome::Replied
            }
            Err(e) => {
                error!(error = %e, "Failed to send chat message");
                self.messages
                    .push(Message::new("error", MessageRole::Assistant, CONNECTIVITY_ERROR));
                SubmitOutcome::Failed
            }
        };
        self.loading = false;
        result
    }

    pub async fn submit_message(&mut self, text: &str, phone_number: &str) -> SubmitOutcome {
        let Some(request) = self.begin_submit(text, phone_number) else {
            return SubmitOutcome::Rejected;
        };
        info!(messages = self.messages.len(), "Sending chat message");
        let outcome = self.client.chat(&request).await;
        self.complete_submit(outcome)
    }

    /// Submit whatever is in the input buffer under the current phone number.
    pub async fn submit_input(&mut self) -> SubmitOutcome {
        let text = self.input.clone();
        let phone_number = self.phone_number.clone();
        self.submit_message(&text, &phone_number).await
    }

    /// Start over with an empty conversation; the phone number is kept.
    pub fn reset(&mut self) {
        self.loading = false;
        self.messages.clear();
        self.input.clear();
    }
}
