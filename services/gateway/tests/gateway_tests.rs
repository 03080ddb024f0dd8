//! Gateway proxy tests against a wiremock upstream.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header as header_match, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gateway::{router, AppState, Config};

fn app(base_url: &str) -> Router {
    let mut config = Config::default();
    config.upstream.base_url = base_url.to_string();
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    router(AppState {
        config: Arc::new(config),
        http_client,
    })
}

async fn post_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: &Value,
) -> (StatusCode, Value) {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        request = request.header(header::AUTHORIZATION, auth);
    }
    let response = app
        .oneshot(
            request
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn reserved_login_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_json(
        app(&server.uri()),
        "/auth/login",
        None,
        &json!({ "email": "hr@camvitals.com", "password": "securepassword123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["id"], "hr-001");
    assert_eq!(body["data"]["user"]["role"], "HR");
    assert!(body["data"]["token"]
        .as_str()
        .unwrap()
        .starts_with("hr-token-"));
}

#[tokio::test]
async fn wrong_password_for_reserved_email_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(
            json!({ "email": "hr@camvitals.com", "password": "wrong" }),
        ))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_json(
        app(&server.uri()),
        "/auth/login",
        None,
        &json!({ "email": "hr@camvitals.com", "password": "wrong" }),
    )
    .await;

    // Upstream status and body come through untouched.
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Invalid credentials" }));
}

#[tokio::test]
async fn login_relays_upstream_success() {
    let server = MockServer::start().await;
    let upstream_body = json!({
        "status": "success",
        "data": { "user": { "id": "u-42" }, "token": "jwt" }
    });
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_json(
        app(&server.uri()),
        "/auth/login",
        None,
        &json!({ "email": "someone@example.com", "password": "pw" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream_body);
}

#[tokio::test]
async fn unreachable_upstream_collapses_to_auth_failed() {
    // Nothing listens here; the connection is refused immediately.
    let (status, body) = post_json(
        app("http://127.0.0.1:9"),
        "/auth/login",
        None,
        &json!({ "email": "someone@example.com", "password": "pw" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "Authentication failed" })
    );
}

#[tokio::test]
async fn chatbot_requires_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chatbot/message"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_json(
        app(&server.uri()),
        "/chatbot/message",
        None,
        &json!({ "message": "hello" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Authorization header is required" }));
}

#[tokio::test]
async fn chatbot_forwards_auth_and_relays_success() {
    let server = MockServer::start().await;
    let upstream_body = json!({ "reply": "You seem stressed. Take a break." });
    Mock::given(method("POST"))
        .and(path("/api/v1/chatbot/message"))
        .and(header_match("authorization", "Bearer hr-token-1"))
        .and(body_json(json!({ "message": "how am I doing?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_json(
        app(&server.uri()),
        "/chatbot/message",
        Some("Bearer hr-token-1"),
        &json!({ "message": "how am I doing?" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream_body);
}

#[tokio::test]
async fn chatbot_upstream_error_keeps_status_with_stable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chatbot/message"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("upstream stack trace goes here"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_json(
        app(&server.uri()),
        "/chatbot/message",
        Some("Bearer t"),
        &json!({ "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "Chatbot service unavailable" }));
}
