use super::client::extract_text;
use super::*;
use crate::config::GeminiConfig;

fn parse(json: &str) -> GenerateContentResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_request_shape() {
    let req = GenerateContentRequest::from_prompt("hello", None);
    let value = serde_json::to_value(&req).unwrap();

    assert_eq!(value["contents"][0]["role"], "user");
    assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    assert!(value.get("generationConfig").is_none());
}

#[test]
fn test_request_with_temperature() {
    let req = GenerateContentRequest::from_prompt("hello", Some(0.5));
    let value = serde_json::to_value(&req).unwrap();

    assert_eq!(value["generationConfig"]["temperature"], 0.5);
}

#[test]
fn test_extract_text_joins_parts() {
    let body = parse(
        r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "1. Coca-Cola\n"}, {"text": "2. Pepsi"}]},
                "finishReason": "STOP"
            }]
        }"#,
    );

    assert_eq!(extract_text(&body).unwrap(), "1. Coca-Cola\n2. Pepsi");
}

#[test]
fn test_extract_text_no_candidates() {
    let body = parse(r#"{"candidates": []}"#);
    assert!(matches!(
        extract_text(&body),
        Err(CompletionError::EmptyResponse)
    ));
}

#[test]
fn test_extract_text_candidate_without_content() {
    let body = parse(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#);
    assert!(matches!(
        extract_text(&body),
        Err(CompletionError::EmptyResponse)
    ));
}

#[test]
fn test_extract_text_blocked_prompt() {
    let body = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
    match extract_text(&body) {
        Err(CompletionError::Blocked(reason)) => assert_eq!(reason, "SAFETY"),
        other => panic!("expected Blocked, got {:?}", other),
    }
}

#[test]
fn test_generate_url() {
    let config = GeminiConfig {
        base_url: "https://example.test/".to_string(),
        ..GeminiConfig::default()
    };
    let client = GeminiClient::new(&config, "key").unwrap();

    assert_eq!(
        client.generate_url(),
        "https://example.test/v1beta/models/gemini-1.5-pro:generateContent"
    );
    assert_eq!(client.model(), "gemini-1.5-pro");
}

#[test]
fn test_empty_key_rejected() {
    let result = GeminiClient::new(&GeminiConfig::default(), "   ");
    assert!(matches!(result, Err(CompletionError::Config(_))));
}

#[test]
fn test_debug_hides_key() {
    let client = GeminiClient::new(&GeminiConfig::default(), "super-secret").unwrap();
    let rendered = format!("{:?}", client);
    assert!(!rendered.contains("super-secret"));
}

#[test]
fn test_unreachable_endpoint_is_error() {
    let config = GeminiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 5,
        ..GeminiConfig::default()
    };
    let client = GeminiClient::new(&config, "key").unwrap();

    let result = client.complete("1. Coke\n");
    assert!(result.is_err());
}

// Integration test - requires GEMINI_API_KEY and network access
#[test]
#[ignore]
fn test_live_round_trip() {
    let key = std::env::var("GEMINI_API_KEY").unwrap();
    let client = GeminiClient::new(&GeminiConfig::default(), key).unwrap();

    let info = client.model_info().unwrap();
    assert!(info.name.contains("gemini"));

    let text = client.complete("Reply with the single word: ok").unwrap();
    assert!(!text.trim().is_empty());
}
