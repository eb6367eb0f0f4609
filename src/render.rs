// src/render.rs
//! Plain-text presentation of chat bubbles and summary cards.

use crate::message::{ConversationSummary, RelaySummary};
use crate::services::chat_session::{Message, MessageRole};
use crate::services::summary_lookup::{LookupState, SummaryView};

pub const ASSISTANT_NAME: &str = "RigaudChat";
pub const USER_LABEL: &str = "Você";
pub const TYPING_INDICATOR: &str = "RigaudChat: Digitando...";
pub const DISCLAIMER: &str =
    "Este é um assistente virtual. Para emergências, procure atendimento médico imediato.";
pub const FOLLOW_UP_NOTICE: &str = "Acompanhamento Necessário: Esta conversa indica a necessidade \
de acompanhamento médico profissional.";

pub fn render_message(message: &Message) -> String {
    let speaker = match message.role {
        MessageRole::User => USER_LABEL,
        MessageRole::Assistant => ASSISTANT_NAME,
    };
    format!("[{}] {}: {}", message.timestamp.format("%H:%M"), speaker, message.content)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_list(out: &mut String, title: &str, items: &[String], bullet: &str) {
    out.push('\n');
    push_line(out, title);
    for item in items {
        push_line(out, &format!("  {} {}", bullet, item));
    }
}

pub fn render_relay_summary(summary: &RelaySummary) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("Sumário da Conversa [{}]", summary.urgency_level.label()));
    push_line(&mut out, &format!("ID: {}", summary.id));
    push_line(&mut out, &format!("Data: {}", summary.date));
    push_line(&mut out, &format!("Duração: {}", summary.duration));
    if let Some(error) = &summary.error {
        push_line(&mut out, &format!("Aviso: {}", error));
    }
    push_list(&mut out, "Principais Tópicos Abordados", &summary.main_topics, "#");
    push_list(&mut out, "Pontos-Chave da Conversa", &summary.key_points, "✓");
    push_list(&mut out, "Recomendações", &summary.recommendations, "!");
    if summary.follow_up_needed {
        out.push('\n');
        push_line(&mut out, FOLLOW_UP_NOTICE);
    }
    out
}

pub fn render_triage_summary(summary: &ConversationSummary) -> String {
    let mut out = String::new();
    push_line(&mut out, "Sumário de Triagem");
    push_line(&mut out, &format!("ID: {}", summary.id));
    push_line(&mut out, &format!("Data: {}", summary.date));
    if summary.key_points.is_empty() {
        out.push('\n');
        push_line(&mut out, "Nenhum sumário de triagem disponível.");
    } else {
        push_list(&mut out, "Pontos-Chave", &summary.key_points, "-");
    }
    out
}

/// Text for the current lookup state; `None` while idle.
pub fn render_lookup_state(state: &LookupState) -> Option<String> {
    match state {
        LookupState::Idle => None,
        LookupState::Loading => Some("Buscando...".to_string()),
        LookupState::Error(message) => Some(format!("Erro: {}", message)),
        LookupState::Success(SummaryView::Relay(summary)) => Some(render_relay_summary(summary)),
        LookupState::Success(SummaryView::Triage(summary)) => Some(render_triage_summary(summary)),
    }
}
