//! Integration tests for the HTTP surface.
//!
//! Exercises the router directly with `tower::ServiceExt::oneshot`, so no
//! socket is bound and tests run in parallel without port coordination.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use unraid_app::config::AppConfig;
use unraid_app::routes::create_router;
use unraid_app::state::AppState;
use unraid_app::templates::init_templates;

fn test_router(app_name: &str, version: &str) -> Router {
    let config = AppConfig::from_lookup(|key| match key {
        "APP_NAME" => Some(app_name.to_string()),
        "VERSION" => Some(version.to_string()),
        _ => None,
    })
    .expect("test config");
    let tera = init_templates().expect("templates");
    create_router(AppState::new(config, tera))
}

fn default_router() -> Router {
    test_router("TestApp", "1.2.3")
}

/// Issue a request and return (status, content-type, body).
async fn request(app: Router, method: Method, path: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, path: &str) -> (StatusCode, String, String) {
    request(app, Method::GET, path).await
}

fn parse_mb(value: &Value) -> u64 {
    value
        .as_str()
        .expect("memory value is a string")
        .strip_suffix(" MB")
        .expect("memory value ends with ' MB'")
        .parse()
        .expect("memory value is a whole number")
}

#[tokio::test]
async fn health_reports_healthy() {
    for path in ["/health", "/healthz"] {
        let (status, content_type, body) = get(default_router(), path).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("application/json"));

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["uptime"].as_f64().unwrap() >= 0.0);

        let timestamp = json["timestamp"].as_str().unwrap();
        chrono::DateTime::parse_from_rfc3339(timestamp).expect("ISO-8601 timestamp");
    }
}

#[tokio::test]
async fn info_reports_configuration_and_host_facts() {
    let (status, content_type, body) = get(default_router(), "/info").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["app"], "TestApp");
    assert_eq!(json["version"], "1.2.3");
    assert_eq!(json["platform"], std::env::consts::OS);
    assert_eq!(json["arch"], std::env::consts::ARCH);
    assert!(json["uptime"].as_f64().unwrap() >= 0.0);
    assert!(!json["hostname"].as_str().unwrap().is_empty());
    assert!(!json["rust"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn info_memory_values_are_consistent() {
    let (_, _, body) = get(default_router(), "/info").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    let total = parse_mb(&json["memory"]["total"]);
    let free = parse_mb(&json["memory"]["free"]);
    let used = parse_mb(&json["memory"]["used"]);

    assert!(free <= total);
    assert_eq!(used, total - free);
}

#[tokio::test]
async fn unmatched_paths_serve_the_landing_page() {
    for path in ["/", "/foo", "/anything/nested", "/health2"] {
        let (status, content_type, body) = get(default_router(), path).await;
        assert_eq!(status, StatusCode::OK, "path {}", path);
        assert!(content_type.starts_with("text/html"), "path {}", path);
        assert!(body.contains("TestApp"), "path {}", path);
        assert!(body.contains("1.2.3"), "path {}", path);
        assert!(body.contains("/health"), "path {}", path);
        assert!(body.contains("/info"), "path {}", path);
    }
}

#[tokio::test]
async fn methods_are_not_distinguished() {
    // The template answers every method on a matched path identically.
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let (status, _, body) = request(default_router(), method.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK, "method {}", method);
        assert!(body.contains("healthy"), "method {}", method);
    }

    let (status, content_type, _) = request(default_router(), Method::POST, "/nowhere").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn landing_page_escapes_environment_values() {
    let app = test_router("<script>alert(1)</script>", "1.0");
    let (status, _, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn default_identity_is_served_when_unconfigured() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let tera = init_templates().unwrap();
    let app = create_router(AppState::new(config, tera));

    let (_, _, body) = get(app, "/info").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["app"], "unraid-app");
    assert_eq!(json["version"], "development");
}
