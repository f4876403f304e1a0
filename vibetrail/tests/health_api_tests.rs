use axum::http::StatusCode;
use tower::ServiceExt;
use wiremock::MockServer;

mod common;
use common::{body_json, get, test_router};

#[tokio::test]
async fn test_health_reports_unconfigured_upstreams() {
    let app = test_router(None, None);
    let response = app.oneshot(get("/api/v1/health")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["llm"]["status"], "unavailable");
    assert_eq!(body["data"]["taste"]["status"], "unconfigured");
}

#[tokio::test]
async fn test_health_reports_configured_upstreams() {
    let llm = MockServer::start().await;
    let taste = MockServer::start().await;

    let app = test_router(Some(format!("{}/v1", llm.uri())), Some(taste.uri()));
    let response = app.oneshot(get("/api/v1/health")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["llm"]["status"], "available");
    assert_eq!(body["data"]["llm"]["provider"], "openai");
    assert_eq!(body["data"]["llm"]["model"], "openai/gpt-4o-mini");
    assert_eq!(body["data"]["taste"]["status"], "configured");
}

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let app = test_router(None, None);
    let response = app
        .oneshot(get("/api/v1/openapi.json"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["info"]["title"], "VibeTrail API");
    assert!(body["paths"]["/api/v1/recommendations"].is_object());
    assert!(body["paths"]["/api/v1/plan"].is_object());
    assert!(body["paths"]["/api/v1/ecosystem"].is_object());
}

#[tokio::test]
async fn test_docs_page_is_served() {
    let app = test_router(None, None);
    let response = app.oneshot(get("/api/v1/docs")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}
