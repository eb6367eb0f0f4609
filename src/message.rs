// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /chat` on the backend, and of `POST /api/chat` on the relay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// What the chat controller keeps from a backend reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub content: String,
    pub phone_number: Option<String>,
}

/// Body of `POST /api/summary` on the relay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelaySummaryRequest {
    #[serde(default)]
    pub conversation_id: String,
}

/// Body the relay forwards to `POST {backend}/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSummaryRequest {
    pub conversation_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Undefined,
}

impl UrgencyLevel {
    pub fn label(self) -> &'static str {
        match self {
            UrgencyLevel::High => "Alta Prioridade",
            UrgencyLevel::Medium => "Prioridade Média",
            UrgencyLevel::Low => "Baixa Prioridade",
            UrgencyLevel::Undefined => "Não Definida",
        }
    }
}

/// Structured summary served by the relay, real or synthesized.
///
/// Only `error` tells a fallback payload apart from backend data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelaySummary {
    pub id: String,
    pub date: String,
    pub duration: String,
    pub main_topics: Vec<String>,
    pub key_points: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub follow_up_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Triage summary as displayed by the direct lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: String,
    pub date: String,
    pub key_points: Vec<String>,
    pub markdown: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_omits_absent_identifiers() {
        let req = ChatRequest {
            message: "Estou com febre".to_string(),
            phone_number: Some("+5511999999999".to_string()),
            conversation_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({ "message": "Estou com febre", "phone_number": "+5511999999999" }));
    }

    #[test]
    fn relay_summary_tolerates_missing_fields_and_unknown_urgency() {
        let summary: RelaySummary =
            serde_json::from_value(json!({ "id": "conv_1", "urgencyLevel": "critical" })).unwrap();
        assert_eq!(summary.id, "conv_1");
        assert_eq!(summary.urgency_level, UrgencyLevel::Undefined);
        assert!(summary.key_points.is_empty());
        assert!(summary.error.is_none());
    }

    #[test]
    fn urgency_labels() {
        assert_eq!(UrgencyLevel::High.label(), "Alta Prioridade");
        assert_eq!(UrgencyLevel::Undefined.label(), "Não Definida");
    }
}
