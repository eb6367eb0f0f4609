// src/services/mock_summary.rs
//! Synthetic summaries the relay serves when the backend cannot.

use chrono::{DateTime, Local};

use crate::message::{RelaySummary, UrgencyLevel};
use crate::services::triage::format_display_date;

pub const UNAVAILABLE_ERROR: &str = "Erro ao conectar com o servidor. Dados de exemplo exibidos.";

/// Id carried by the "unavailable" summary, whatever was asked for.
pub const UNKNOWN_CONVERSATION_ID: &str = "mockConversationId";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demo summary served when the backend answers with a non-2xx status.
pub fn demo_summary(conversation_id: &str, now: DateTime<Local>) -> RelaySummary {
    RelaySummary {
        id: conversation_id.to_string(),
        date: format_display_date(&now),
        duration: "8 minutos".to_string(),
        main_topics: strings(&["Dor de cabeça", "Náusea", "Desidratação", "Falta de sono"]),
        key_points: strings(&[
            "Paciente relata dor de cabeça constante há 3 dias",
            "Dor localizada na testa e têmporas",
            "Presença de náusea associada",
            "Histórico de pouca ingestão de água e sono inadequado",
        ]),
        recommendations: strings(&[
            "Aumentar ingestão de água",
            "Descansar em ambiente escuro",
            "Aplicar compressa fria na testa",
            "Procurar médico se sintomas persistirem ou piorarem",
        ]),
        urgency_level: UrgencyLevel::Medium,
        follow_up_needed: true,
        error: None,
    }
}

/// Placeholder served when the backend is unreachable or the exchange failed outright.
pub fn unavailable_summary(now: DateTime<Local>) -> RelaySummary {
    RelaySummary {
        id: UNKNOWN_CONVERSATION_ID.to_string(),
        date: format_display_date(&now),
        duration: "Não disponível".to_string(),
        main_topics: strings(&["Conversa não encontrada"]),
        key_points: strings(&["Não foi possível recuperar os dados da conversa"]),
        recommendations: strings(&["Verifique se o ID da conversa está correto"]),
        urgency_level: UrgencyLevel::Low,
        follow_up_needed: false,
        error: Some(UNAVAILABLE_ERROR.to_string()),
    }
}
