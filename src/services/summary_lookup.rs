// src/services/summary_lookup.rs
use chrono::Local;
use serde_json::Value;
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::message::{ConversationSummary, RelaySummary};
use crate::services::backend_client::{BackendClient, SummaryKey};
use crate::services::triage::build_summary;

pub const NOT_FOUND_ERROR: &str = "Conversa não encontrada";
pub const LOOKUP_FAILED_ERROR: &str = "Erro ao buscar sumário";

/// The three ways a summary can be looked up. They differ in identifier,
/// endpoint and failure behaviour, and are kept apart on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupVariant {
    /// `POST {relay}/api/summary` with `{conversationId}`. The relay may answer with mock data.
    Relay,
    /// `GET {backend}/summary?conversationId=`.
    ByConversationId,
    /// `GET {backend}/summary?phoneNumber=`.
    ByPhoneNumber,
}

impl LookupVariant {
    pub fn validation_error(self) -> &'static str {
        match self {
            LookupVariant::Relay | LookupVariant::ByConversationId => {
                "Por favor, digite um ID de conversa válido"
            }
            LookupVariant::ByPhoneNumber => "Por favor, digite um número de telefone válido",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView {
    Relay(RelaySummary),
    Triage(ConversationSummary),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(SummaryView),
    Error(String),
}

#[derive(Debug)]
pub struct SummaryLookup {
    variant: LookupVariant,
    client: BackendClient,
    state: LookupState,
}

impl SummaryLookup {
    /// `client` must point at the relay for [`LookupVariant::Relay`] and at
    /// the backend otherwise.
    pub fn new(variant: LookupVariant, client: BackendClient) -> Self {
        Self {
            variant,
            client,
            state: LookupState::Idle,
        }
    }

    pub fn variant(&self) -> LookupVariant {
        self.variant
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LookupState::Loading
    }

    pub fn reset(&mut self) {
        self.state = LookupState::Idle;
    }

    /// Validate the identifier and move to `Loading`, dropping any previous result.
    ///
    /// Returns the trimmed identifier, or `None` if nothing should be fetched.
    pub fn begin_search(&mut self, identifier: &str) -> Option<String> {
        if self.is_loading() {
            return None;
        }
        let identifier = identifier.trim();
        if identifier.is_empty() {
            self.state = LookupState::Error(self.variant.validation_error().to_string());
            return None;
        }
        self.state = LookupState::Loading;
        Some(identifier.to_string())
    }

    pub fn complete_search(&mut self, identifier: &str, outcome: Result<Value>) -> &LookupState {
        self.state = match outcome.and_then(|body| self.interpret(identifier, body)) {
            Ok(view) => LookupState::Success(view),
            Err(AppError::BackendStatus(status)) => {
                info!(status, identifier = %identifier, "Summary not found");
                LookupState::Error(NOT_FOUND_ERROR.to_string())
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch summary");
                LookupState::Error(LOOKUP_FAILED_ERROR.to_string())
            }
        };
        &self.state
    }

    fn interpret(&self, identifier: &str, body: Value) -> Result<SummaryView> {
        match self.variant {
            LookupVariant::Relay => {
                let summary: RelaySummary = serde_json::from_value(body)
                    .map_err(|e| AppError::MalformedResponse(format!("relay summary: {}", e)))?;
                Ok(SummaryView::Relay(summary))
            }
            LookupVariant::ByConversationId | LookupVariant::ByPhoneNumber => {
                Ok(SummaryView::Triage(build_summary(&body, identifier, Local::now())))
            }
        }
    }

    async fn fetch(&self, identifier: &str) -> Result<Value> {
        match self.variant {
            LookupVariant::Relay => self.client.relay_summary(identifier).await,
            LookupVariant::ByConversationId => {
                self.client.lookup_summary(SummaryKey::ConversationId, identifier).await
            }
            LookupVariant::ByPhoneNumber => {
                self.client.lookup_summary(SummaryKey::PhoneNumber, identifier).await
            }
        }
    }

    pub async fn search(&mut self, identifier: &str) -> &LookupState {
        let Some(identifier) = self.begin_search(identifier) else {
            return &self.state;
        };
        let outcome = self.fetch(&identifier).await;
        self.complete_search(&identifier, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup(variant: LookupVariant) -> SummaryLookup {
        SummaryLookup::new(variant, BackendClient::new("http://127.0.0.1:8000", None).unwrap())
    }

    #[test]
    fn empty_identifier_sets_validation_error() {
        let mut by_phone = lookup(LookupVariant::ByPhoneNumber);
        assert!(by_phone.begin_search("  ").is_none());
        assert_eq!(
            by_phone.state(),
            &LookupState::Error("Por favor, digite um número de telefone válido".to_string())
        );
    }

    #[test]
    fn new_search_clears_previous_result() {
        let mut by_id = lookup(LookupVariant::ByConversationId);
        by_id.complete_search("a", Ok(json!({ "triage_summary": "x" })));
        assert!(matches!(by_id.state(), LookupState::Success(_)));

        assert_eq!(by_id.begin_search(" b ").as_deref(), Some("b"));
        assert_eq!(by_id.state(), &LookupState::Loading);
        assert!(by_id.begin_search("c").is_none());
    }

    #[test]
    fn non_success_status_is_not_found() {
        let mut by_id = lookup(LookupVariant::ByConversationId);
        by_id.begin_search("conv_1");
        let state = by_id.complete_search("conv_1", Err(AppError::BackendStatus(404)));
        assert_eq!(state, &LookupState::Error(NOT_FOUND_ERROR.to_string()));
    }

    #[test]
    fn malformed_relay_payload_is_a_lookup_failure() {
        let mut relay = lookup(LookupVariant::Relay);
        relay.begin_search("conv_1");
        let state = relay.complete_search("conv_1", Ok(json!(["not", "an", "object"])));
        assert_eq!(state, &LookupState::Error(LOOKUP_FAILED_ERROR.to_string()));
    }

    #[test]
    fn malformed_relay_payload_is_classified_as_malformed() {
        let relay = lookup(LookupVariant::Relay);
        let err = relay.interpret("conv_1", json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn triage_body_becomes_key_points() {
        let mut by_phone = lookup(LookupVariant::ByPhoneNumber);
        by_phone.begin_search("+55");
        let state = by_phone.complete_search("+55", Ok(json!({ "triage_summary": { "summary": "Texto" } })));
        match state {
            LookupState::Success(SummaryView::Triage(summary)) => {
                assert_eq!(summary.id, "+55");
                assert_eq!(summary.key_points, vec!["Texto"]);
                assert_eq!(summary.markdown, "Texto");
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }
}
