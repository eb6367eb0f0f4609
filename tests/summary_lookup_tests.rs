mod common;

use rigaudchat::message::UrgencyLevel;
use rigaudchat::services::summary_lookup::{
    LOOKUP_FAILED_ERROR, LookupState, LookupVariant, NOT_FOUND_ERROR, SummaryLookup, SummaryView,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_lookup_by_conversation_id_splits_narrative() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .and(query_param("conversationId", "conv_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "conv_1",
            "finalized_at": "2025-01-02T18:30:12.123456",
            "triage_summary": "Linha 1\nLinha 2\n\n"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut lookup = SummaryLookup::new(
        LookupVariant::ByConversationId,
        common::client_for(&server.uri()),
    );

    match lookup.search(" conv_1 ").await {
        LookupState::Success(SummaryView::Triage(summary)) => {
            assert_eq!(summary.id, "conv_1");
            assert_eq!(summary.key_points, vec!["Linha 1", "Linha 2"]);
            assert_eq!(summary.markdown, "Linha 1\nLinha 2\n\n");
            assert_eq!(summary.date, "02/01/2025, 18:30");
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_by_phone_reads_nested_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .and(query_param("phoneNumber", "+5511999999999"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "triage_summary": { "summary": "Texto" } })),
        )
        .mount(&server)
        .await;

    let mut lookup = SummaryLookup::new(
        LookupVariant::ByPhoneNumber,
        common::client_for(&server.uri()),
    );

    match lookup.search("+5511999999999").await {
        LookupState::Success(SummaryView::Triage(summary)) => {
            assert_eq!(summary.id, "+5511999999999");
            assert_eq!(summary.markdown, "Texto");
            assert!(!summary.date.is_empty());
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_direct_lookup_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut lookup = SummaryLookup::new(
        LookupVariant::ByConversationId,
        common::client_for(&server.uri()),
    );

    assert_eq!(
        lookup.search("conv_x").await,
        &LookupState::Error(NOT_FOUND_ERROR.to_string())
    );
}

#[tokio::test]
async fn test_direct_lookup_unreachable_backend() {
    let mut lookup = SummaryLookup::new(
        LookupVariant::ByPhoneNumber,
        common::client_for(&common::unreachable_url()),
    );

    assert_eq!(
        lookup.search("+55").await,
        &LookupState::Error(LOOKUP_FAILED_ERROR.to_string())
    );
    assert!(!lookup.is_loading());
}

#[tokio::test]
async fn test_empty_identifier_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut lookup = SummaryLookup::new(
        LookupVariant::ByConversationId,
        common::client_for(&server.uri()),
    );

    assert_eq!(
        lookup.search("").await,
        &LookupState::Error("Por favor, digite um ID de conversa válido".to_string())
    );
}

#[tokio::test]
async fn test_relay_lookup_returns_structured_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summary"))
        .and(body_json(json!({ "conversationId": "conv_1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "conv_1",
            "date": "14/03/2025, 09:05",
            "duration": "8 minutos",
            "mainTopics": ["Dor de cabeça"],
            "keyPoints": ["Dor localizada na testa e têmporas"],
            "recommendations": ["Aumentar ingestão de água"],
            "urgencyLevel": "medium",
            "followUpNeeded": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut lookup = SummaryLookup::new(LookupVariant::Relay, common::client_for(&server.uri()));

    match lookup.search("conv_1").await {
        LookupState::Success(SummaryView::Relay(summary)) => {
            assert_eq!(summary.urgency_level, UrgencyLevel::Medium);
            assert!(summary.follow_up_needed);
            assert!(summary.error.is_none());
        }
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn test_relay_lookup_rejected_request_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summary"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "ID da conversa é obrigatório" })))
        .mount(&server)
        .await;

    let mut lookup = SummaryLookup::new(LookupVariant::Relay, common::client_for(&server.uri()));

    assert_eq!(
        lookup.search("conv_1").await,
        &LookupState::Error(NOT_FOUND_ERROR.to_string())
    );
}
