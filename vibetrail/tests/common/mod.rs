#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};

use vibetrail::api::{create_router, AppState};
use vibetrail::config::{Config, LlmConfig, ServerConfig, TasteConfig};
use vibetrail::llm::LlmProvider;
use vibetrail::taste::TasteClient;

pub fn llm_config_with_base_url(base_url: String) -> LlmConfig {
    LlmConfig {
        model: "openai/gpt-4o-mini".to_string(),
        api_key: Some("test-key".to_string()),
        base_url: Some(base_url),
        timeout_secs: 5,
    }
}

pub fn taste_config(base_url: String) -> TasteConfig {
    TasteConfig {
        api_key: "taste-test-key".to_string(),
        base_url,
        timeout_secs: 5,
    }
}

/// Build the full application router backed by mock upstream base URLs.
///
/// `None` for either upstream leaves that side unconfigured, matching the
/// production behavior when the corresponding env vars are unset.
pub fn test_router(llm_base_url: Option<String>, taste_base_url: Option<String>) -> Router {
    test_router_with_llm(llm_base_url.map(llm_config_with_base_url), taste_base_url)
}

/// Like [`test_router`], but with full control over the LLM config, for
/// exercising misconfiguration paths.
pub fn test_router_with_llm(llm: Option<LlmConfig>, taste_base_url: Option<String>) -> Router {
    let taste = taste_base_url.map(taste_config);

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        llm: llm.clone(),
        taste: taste.clone(),
    };

    let provider = LlmProvider::new(llm.as_ref());
    let taste_client = taste
        .as_ref()
        .map(|cfg| TasteClient::new(cfg).expect("taste client"));

    create_router(AppState::new(config, provider, taste_client))
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// OpenAI-style chat completion reply carrying the given message content.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "gpt-4o-mini",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 1,
            "total_tokens": 2
        }
    })
}

/// Graph-service insights reply carrying the given entity array.
pub fn insights_body(entities: Value) -> Value {
    json!({
        "results": {
            "entities": entities
        }
    })
}

/// A seed-extraction reply in the wrapped shape the prompt asks for.
pub fn seeds_reply() -> String {
    json!({
        "seeds": [
            {
                "text": "cozy jazz bars",
                "category": "activity",
                "confidence": 0.9,
                "searchTerms": ["jazz club", "live music bar"]
            },
            {
                "text": "french bistro",
                "category": "food",
                "confidence": 0.8,
                "searchTerms": ["bistro"]
            }
        ],
        "vibeContext": {
            "timeOfDay": "evening",
            "mood": "relaxed"
        }
    })
    .to_string()
}
