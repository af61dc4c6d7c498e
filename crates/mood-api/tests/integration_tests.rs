//! Integration tests for the mood API

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use mood_api::{
    build_app, build_state,
    config::ServerConfig,
    handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse, MoodResponse},
    service::MoodService,
};
use mood_domain::{RawSentiment, SentimentSource, SourceError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

/// Sentiment source returning a fixed measurement and counting calls
struct StubSource {
    raw: Result<RawSentiment, SourceError>,
    calls: AtomicUsize,
}

impl StubSource {
    fn scoring(polarity: f64, subjectivity: f64) -> Arc<Self> {
        Arc::new(Self {
            raw: Ok(RawSentiment::new(polarity, subjectivity)),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            raw: Err(SourceError::Failed(message.to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SentimentSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    fn score(&self, _text: &str) -> Result<RawSentiment, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.raw.clone()
    }
}

/// Helper to create a router around a stub source
fn create_test_app(source: Arc<StubSource>) -> Router {
    create_router(AppState {
        service: MoodService::new(source),
    })
}

fn mood_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/mood")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn read_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_app(StubSource::scoring(0.0, 0.0));

    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = read_body(response).await;
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_mood_override_scenarios() {
    let cases = [
        (0.8, 0.8, "excited", 0.9),
        (-0.8, 0.75, "angry", 0.875),
        (0.8, 0.6, "very happy", 0.8),
        (0.0, 0.95, "neutral", 0.975),
        (0.5, 0.0, "happy", 0.5),
        (-0.5, 0.0, "very sad", 0.5),
        (-0.1, 0.2, "sad", 0.6),
    ];

    for (polarity, subjectivity, mood, confidence) in cases {
        let app = create_test_app(StubSource::scoring(polarity, subjectivity));
        let response = app
            .oneshot(mood_request(r#"{"text": "some text"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: MoodResponse = read_body(response).await;
        assert_eq!(body.text, "some text");
        assert_eq!(body.mood, mood, "p={} s={}", polarity, subjectivity);
        assert!(
            (body.confidence - confidence).abs() < 1e-9,
            "p={} s={}: confidence {}",
            polarity,
            subjectivity,
            body.confidence
        );
    }
}

#[tokio::test]
async fn test_empty_text_rejected_without_scoring() {
    let source = StubSource::scoring(0.5, 0.5);
    let app = create_test_app(source.clone());

    let response = app.oneshot(mood_request(r#"{"text": ""}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_body(response).await;
    assert_eq!(error.detail, "No text provided");
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_missing_text_rejected_without_scoring() {
    let source = StubSource::scoring(0.5, 0.5);
    let app = create_test_app(source.clone());

    let response = app.oneshot(mood_request(r#"{}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_body(response).await;
    assert_eq!(error.detail, "No text provided");
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_whitespace_text_is_accepted() {
    let source = StubSource::scoring(0.0, 0.0);
    let app = create_test_app(source.clone());

    let response = app
        .oneshot(mood_request(r#"{"text": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: MoodResponse = read_body(response).await;
    assert_eq!(body.text, "   ");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_source_failure_is_server_error() {
    let app = create_test_app(StubSource::failing("tagger crashed"));

    let response = app
        .oneshot(mood_request(r#"{"text": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = read_body(response).await;
    assert!(error.detail.contains("tagger crashed"));
}

#[tokio::test]
async fn test_out_of_range_score_is_server_error() {
    let app = create_test_app(StubSource::scoring(-1.5, 0.5));

    let response = app
        .oneshot(mood_request(r#"{"text": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = read_body(response).await;
    assert!(error.detail.contains("polarity"));
}

#[tokio::test]
async fn test_repeated_request_is_identical() {
    let state = build_state(&ServerConfig::default()).unwrap();
    let app = create_router(state);
    let body = r#"{"text": "What a wonderful, lovely afternoon"}"#;

    let first = app.clone().oneshot(mood_request(body)).await.unwrap();
    let first = axum::body::to_bytes(first.into_body(), usize::MAX)
        .await
        .unwrap();

    let second = app.oneshot(mood_request(body)).await.unwrap();
    let second = axum::body::to_bytes(second.into_body(), usize::MAX)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_lexicon_backed_app() {
    let config = ServerConfig::default();
    let app = build_app(build_state(&config).unwrap(), &config).unwrap();

    let response = app
        .oneshot(mood_request(
            r#"{"text": "I'm extremely angry about what happened!"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: MoodResponse = read_body(response).await;
    assert_eq!(body.mood, "angry");
    assert!((body.confidence - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = ServerConfig::default();
    let app = build_app(build_state(&config).unwrap(), &config).unwrap();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/mood")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let config = ServerConfig::default();
    let app = build_app(build_state(&config).unwrap(), &config).unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[test]
fn test_server_config_from_toml() {
    let toml = r#"
        bind_address = "127.0.0.1"
        bind_port = 9000
        allowed_origins = ["https://moods.example.com"]
    "#;

    let config = ServerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.bind_address, "127.0.0.1");
    assert_eq!(config.bind_port, 9000);
    assert_eq!(config.allowed_origins, vec!["https://moods.example.com"]);
    assert_eq!(config.log_level, "info"); // Default
}
