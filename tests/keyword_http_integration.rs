//! Integration tests for the keyword HTTP endpoints.
//!
//! These drive the full router against a mock oracle:
//! 1. Ranking replies are parsed, or replaced by placeholder rows
//! 2. Analysis failures surface as 502 with a stable error code
//! 3. Overlapping analysis submissions keep only the newest result

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use keyword_pulse::adapters::ai::{MockError, MockSearchOracle};
use keyword_pulse::adapters::http::{keyword_routes, KeywordAppState};
use keyword_pulse::application::{
    AnalyzeKeywordHandler, FetchTopKeywordsHandler, KeywordQueryConfig,
};
use keyword_pulse::domain::keyword::PromptBuilder;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn router(oracle: MockSearchOracle) -> Router {
    let oracle = Arc::new(oracle);
    let prompts = PromptBuilder::new("Naver (South Korea)");
    let config = KeywordQueryConfig::default();
    let state = KeywordAppState::new(
        FetchTopKeywordsHandler::new(oracle.clone(), prompts.clone(), config.clone()),
        AnalyzeKeywordHandler::new(oracle, prompts, config),
    );
    keyword_routes(state)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_analysis(keyword: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/analysis")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "keyword": keyword }).to_string()))
        .unwrap()
}

fn analysis_reply(keyword: &str) -> String {
    format!(
        r#"Here is the analysis you asked for.
```json
{{
  "keyword": "{keyword}",
  "searchVolume": "50K+",
  "competition": "Very High",
  "competitionScore": 88,
  "cpcEstimate": "1,200 KRW",
  "summary": "Seasonal interest peaks on weekends.",
  "trendData": [
    {{"date": "D-6", "value": 40}}, {{"date": "D-5", "value": 42}},
    {{"date": "D-4", "value": 45}}, {{"date": "D-3", "value": 51}},
    {{"date": "D-2", "value": 60}}, {{"date": "D-1", "value": 72}},
    {{"date": "Today", "value": 80}}
  ],
  "relatedKeywords": [
    {{"keyword": "{keyword} price", "relevance": 90}},
    {{"keyword": "{keyword} review", "relevance": 75}}
  ]
}}
```"#
    )
}

// =============================================================================
// Ranking
// =============================================================================

#[tokio::test]
async fn top_keywords_returns_parsed_rows_and_sources() {
    let reply = r#"Sure! [
        {"rank": 2, "keyword": "weather", "category": "Life", "change": "down", "volumeEstimate": "80K+"},
        {"rank": 1, "keyword": "stocks", "category": "Finance", "change": "up", "volumeEstimate": "100K+"}
    ]"#;
    let oracle = MockSearchOracle::new().with_reply_and_citations(
        reply,
        vec!["https://a.example", "https://b.example", "https://a.example"],
    );

    let (status, body) = send(router(oracle), get("/api/keywords/top")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin"]["kind"], "live");
    assert_eq!(body["keywords"][0]["rank"], 1);
    assert_eq!(body["keywords"][0]["volumeEstimate"], "100K+");
    assert_eq!(body["keywords"][1]["keyword"], "weather");
    assert_eq!(
        body["sources"],
        json!(["https://a.example", "https://b.example", "https://a.example"])
    );
}

#[tokio::test]
async fn top_keywords_falls_back_when_reply_has_no_payload() {
    let oracle = MockSearchOracle::new().with_reply("I could not find any data today.");

    let (status, body) = send(router(oracle), get("/api/keywords/top")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin"]["kind"], "fallback");
    let rows = body["keywords"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[9]["rank"], 10);
    assert_eq!(rows[0]["category"], "System");
    assert_eq!(rows[0]["change"], "same");
    assert_eq!(body["sources"], json!([]));
}

#[tokio::test]
async fn top_keywords_falls_back_on_transport_failure() {
    let oracle = MockSearchOracle::new().with_error(MockError::Unavailable {
        message: "503".to_string(),
    });

    let (status, body) = send(router(oracle), get("/api/keywords/top")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin"]["kind"], "fallback");
    assert!(body["origin"]["reason"].as_str().unwrap().contains("503"));
}

// =============================================================================
// Analysis
// =============================================================================

#[tokio::test]
async fn analysis_returns_record_with_sources() {
    let oracle = MockSearchOracle::new()
        .with_reply_and_citations(analysis_reply("camping"), vec!["https://news.example"]);

    let (status, body) = send(router(oracle), get("/api/keywords/camping/analysis")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keyword"], "camping");
    assert_eq!(body["competition"], "Very High");
    assert_eq!(body["competitionScore"], 88);
    assert_eq!(body["trendData"].as_array().unwrap().len(), 7);
    assert_eq!(body["sources"], json!(["https://news.example"]));
}

#[tokio::test]
async fn analysis_of_blank_keyword_is_bad_request() {
    let oracle = MockSearchOracle::new();
    let calls = oracle.clone();

    let (status, body) = send(router(oracle), get("/api/keywords/%20%20/analysis")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(calls.call_count(), 0);
}

#[tokio::test]
async fn analysis_of_malformed_reply_is_bad_gateway() {
    let oracle = MockSearchOracle::new().with_reply("```json\n{ not json }\n```");

    let (status, body) = send(router(oracle), get("/api/keywords/tea/analysis")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "MALFORMED_RESPONSE");
}

#[tokio::test]
async fn analysis_of_empty_reply_is_bad_gateway() {
    let oracle = MockSearchOracle::new().with_empty_reply();

    let (status, body) = send(router(oracle), get("/api/keywords/tea/analysis")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "EMPTY_RESPONSE");
}

#[tokio::test]
async fn analysis_with_out_of_range_score_is_bad_gateway() {
    let reply = analysis_reply("tea").replace("\"competitionScore\": 88", "\"competitionScore\": 140");
    let oracle = MockSearchOracle::new().with_reply(reply);

    let (status, body) = send(router(oracle), get("/api/keywords/tea/analysis")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "INVALID_PAYLOAD");
}

// =============================================================================
// Latest analysis
// =============================================================================

#[tokio::test]
async fn latest_analysis_is_not_found_before_any_submission() {
    let (status, body) = send(router(MockSearchOracle::new()), get("/api/analysis/latest")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn submitted_analysis_becomes_latest() {
    let app = router(MockSearchOracle::new().with_reply(analysis_reply("hiking")));

    let (status, body) = send(app.clone(), post_analysis("hiking")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "current");
    assert_eq!(body["analysis"]["keyword"], "hiking");

    let (status, body) = send(app, get("/api/analysis/latest")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keyword"], "hiking");
}

#[tokio::test]
async fn slower_older_submission_is_superseded() {
    let oracle = MockSearchOracle::new()
        .with_delayed_reply(analysis_reply("old"), Duration::from_millis(300))
        .with_reply(analysis_reply("new"));
    let app = router(oracle);

    let first = tokio::spawn(send(app.clone(), post_analysis("old")));
    tokio::time::sleep(Duration::from_millis(50)).await;
    let (status, second) = send(app.clone(), post_analysis("new")).await;
    let (_, first) = first.await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["status"], "current");
    assert_eq!(first["status"], "superseded");

    let (_, latest) = send(app, get("/api/analysis/latest")).await;
    assert_eq!(latest["keyword"], "new");
}

#[tokio::test]
async fn blank_submission_is_bad_request() {
    let (status, _) = send(router(MockSearchOracle::new()), post_analysis("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let response = router(MockSearchOracle::new())
        .oneshot(get("/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}
