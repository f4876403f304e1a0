use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vibetrail::error::VibeError;
use vibetrail::taste::{EntityCategory, TasteClient};

mod common;
use common::{insights_body, taste_config};

#[tokio::test]
async fn test_fetch_category_sends_api_key_and_entity_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/insights"))
        .and(header("X-Api-Key", "taste-test-key"))
        .and(query_param("filter.type", "urn:entity:movie"))
        .and(query_param("take", "6"))
        .and(query_param("signal.interests.query", "jazz club"))
        .respond_with(ResponseTemplate::new(200).set_body_json(insights_body(json!([
            {"name": "Whiplash", "tasteStrength": 0.9}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = TasteClient::new(&taste_config(server.uri())).expect("client");
    let entities = client
        .fetch_category(EntityCategory::Movies, &["jazz club".to_string()], "Chicago")
        .await
        .expect("fetch");

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, "Whiplash");
}

#[tokio::test]
async fn test_place_categories_send_location_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/insights"))
        .and(query_param("filter.type", "urn:entity:place"))
        .and(query_param("filter.location.query", "Chicago"))
        .and(query_param("take", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(insights_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = TasteClient::new(&taste_config(server.uri())).expect("client");
    let entities = client
        .fetch_category(EntityCategory::Food, &[], "Chicago")
        .await
        .expect("fetch");

    assert!(entities.is_empty());
}

#[tokio::test]
async fn test_media_categories_omit_location_filter() {
    let server = MockServer::start().await;
    // The mock matches only when filter.location.query is absent; a request
    // carrying it falls through and the expect(1) fails.
    Mock::given(method("GET"))
        .and(path("/v2/insights"))
        .and(query_param("filter.type", "urn:entity:book"))
        .respond_with(ResponseTemplate::new(200).set_body_json(insights_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = TasteClient::new(&taste_config(server.uri())).expect("client");
    let result = client
        .fetch_category(EntityCategory::Books, &["noir".to_string()], "Chicago")
        .await;

    assert!(result.is_ok());

    let requests = server.received_requests().await.expect("requests");
    assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "filter.location.query"));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/insights"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = TasteClient::new(&taste_config(server.uri())).expect("client");
    let result = client
        .fetch_category(EntityCategory::Music, &[], "Chicago")
        .await;

    match result {
        Err(VibeError::Taste(message)) => assert!(message.contains("503")),
        other => panic!("Expected taste error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_reply_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = TasteClient::new(&taste_config(server.uri())).expect("client");
    let result = client
        .fetch_category(EntityCategory::Music, &[], "Chicago")
        .await;

    assert!(matches!(result, Err(VibeError::Taste(_))));
}

#[tokio::test]
async fn test_reply_without_results_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = TasteClient::new(&taste_config(server.uri())).expect("client");
    let entities = client
        .fetch_category(EntityCategory::TvShows, &[], "Chicago")
        .await
        .expect("fetch");

    assert!(entities.is_empty());
}
