use chrono::DateTime;
use latchkey_adapters::http::routes::{HealthResponse, ServiceDescriptor};

use crate::helpers::TestApp;

#[tokio::test]
async fn health_reports_healthy() {
    let app = TestApp::new().await;

    let response = app.get_health().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: HealthResponse = response.json().await.expect("Invalid health body");
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "auth-api");
    assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
}

#[tokio::test]
async fn root_describes_the_service() {
    let app = TestApp::new().await;

    let response = app.get_root().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: ServiceDescriptor = response.json().await.expect("Invalid root body");
    assert_eq!(body.status, "running");
    assert_eq!(body.endpoints.health, "/health");
    assert_eq!(body.endpoints.signup, "/signup");
}

#[tokio::test]
async fn any_origin_is_allowed_by_default() {
    let app = TestApp::new().await;

    let response = app.get_health_from_origin("https://somewhere.example").await;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn configured_origins_are_echoed_with_credentials() {
    let app = TestApp::with_allowed_origins(&["https://app.example.com"]).await;

    let response = app.get_health_from_origin("https://app.example.com").await;
    assert_eq!(response.status().as_u16(), 200);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://app.example.com")
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn unlisted_origin_gets_no_cors_headers() {
    let app = TestApp::with_allowed_origins(&["https://app.example.com"]).await;

    let response = app.get_health_from_origin("https://evil.example.com").await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
