use std::time::Duration;

use pretty_assertions::assert_eq;
use qa_client::{ApiErrorKind, BuildError, ClientConfig, Operation, QaBackend, ReqwestBackend};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    qa_logging::initialize_for_tests();
    let config = ClientConfig {
        base_url: format!("{}/api", server.uri()),
        ..ClientConfig::default()
    };
    ReqwestBackend::new(config).expect("backend")
}

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|url| url.to_string()).collect()
}

#[tokio::test]
async fn extract_posts_url_list_and_decodes_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "urls": ["https://a.com", "https://b.com"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Content extracted successfully",
            "content": "--- Content from https://a.com ---",
            "summary": "Short summary.",
            "url_count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = backend_for(&server)
        .extract(&urls(&["https://a.com", "https://b.com"]))
        .await
        .expect("extract ok");

    assert_eq!(response.content, "--- Content from https://a.com ---");
    assert_eq!(response.summary.as_deref(), Some("Short summary."));
}

#[tokio::test]
async fn extract_accepts_minimal_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": "text" })))
        .mount(&server)
        .await;

    let response = backend_for(&server)
        .extract(&urls(&["https://a.com"]))
        .await
        .expect("extract ok");
    assert_eq!(response.content, "text");
    assert_eq!(response.summary, None);
}

#[tokio::test]
async fn answer_sends_model_type_and_reports_model_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/answer"))
        .and(body_json(json!({
            "question": "What is the capital?",
            "urls": ["https://a.com"],
            "model_type": "distilbert"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Paris",
            "confidence": 0.92,
            "context": "Paris is the capital of France.",
            "model_used": "default"
        })))
        .mount(&server)
        .await;

    let response = backend_for(&server)
        .answer("What is the capital?", &urls(&["https://a.com"]), "distilbert")
        .await
        .expect("answer ok");

    assert_eq!(response.answer, "Paris");
    assert_eq!(response.confidence, 0.92);
    assert_eq!(
        response.context.as_deref(),
        Some("Paris is the capital of France.")
    );
    assert_eq!(response.model_used, "default");
}

#[tokio::test]
async fn list_models_decodes_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": {
                "default": {
                    "name": "TF-IDF + spaCy",
                    "description": "Lightweight",
                    "available": true
                },
                "distilbert": {
                    "name": "DistilBERT",
                    "description": "Transformer",
                    "available": false
                }
            },
            "default": "default"
        })))
        .mount(&server)
        .await;

    let catalog = backend_for(&server).list_models().await.expect("models ok");
    assert_eq!(catalog.default, "default");
    assert_eq!(catalog.models.len(), 2);
    assert!(!catalog.models["distilbert"].available);
    assert_eq!(catalog.models["default"].name, "TF-IDF + spaCy");
}

#[tokio::test]
async fn server_error_message_is_preferred() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Error processing https://a.com: timeout" })),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .extract(&urls(&["https://a.com"]))
        .await
        .unwrap_err();

    assert_eq!(err.operation, Operation::Extract);
    assert_eq!(err.kind, ApiErrorKind::HttpStatus(500));
    assert_eq!(err.user_message(), "Error processing https://a.com: timeout");
}

#[tokio::test]
async fn missing_server_message_uses_operation_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/answer"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "  " })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend
        .answer("q", &urls(&["https://a.com"]), "default")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::HttpStatus(502));
    assert_eq!(err.server_message, None);
    assert_eq!(err.user_message(), "Failed to get answer");

    let err = backend.extract(&urls(&["https://a.com"])).await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to extract content from URLs");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .mount(&server)
        .await;

    let err = backend_for(&server).list_models().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert_eq!(err.user_message(), "Failed to load models");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "content": "late" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(format!("{}/api/", server.uri()), 50);
    let backend = ReqwestBackend::new(config).expect("backend");

    let err = backend.extract(&urls(&["https://a.com"])).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Timeout);
    assert_eq!(err.user_message(), "Failed to extract content from URLs");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let base_url = format!("http://{}/api", listener.local_addr().unwrap());
    drop(listener);

    let backend = ReqwestBackend::new(ClientConfig::new(base_url, 2_000)).expect("backend");
    let err = backend.list_models().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.operation, Operation::ListModels);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::new("http://localhost:5000/api/", 30_000);
    assert_eq!(config.endpoint("/extract"), "http://localhost:5000/api/extract");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(
        ClientConfig::default().endpoint("models"),
        "http://localhost:5000/api/models"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestBackend::new(ClientConfig::new("localhost:5000", 1_000)).unwrap_err();
    assert!(matches!(err, BuildError::InvalidBaseUrl { .. }));

    let err = ReqwestBackend::new(ClientConfig::new("not a url", 1_000)).unwrap_err();
    assert!(matches!(err, BuildError::InvalidBaseUrl { .. }));
}
