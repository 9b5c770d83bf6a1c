use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, header};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

async fn send(method: Method, uri: &str, body: &'static str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request should build");
    let response = api_routes(test_app_state()).oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body should read");
    (status, String::from_utf8(bytes.to_vec()).expect("body should be utf-8"))
}

#[tokio::test]
async fn get_auth_returns_placeholder() {
    let (status, body) = send(Method::GET, "/api/auth", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Auth API - Phase 2","status":"not_implemented"}"#);
}

#[tokio::test]
async fn post_auth_echoes_body() {
    let (status, body) = send(Method::POST, "/api/auth", r#"{"x":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Auth API - Phase 2","received":{"x":1},"status":"not_implemented"}"#);
}

#[tokio::test]
async fn nested_auth_paths_share_the_placeholder() {
    let (status, body) = send(Method::GET, "/api/auth/session", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Auth API - Phase 2","status":"not_implemented"}"#);

    let (status, body) = send(Method::POST, "/api/auth/callback/credentials", r#"{"email":"a@b.com"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""received":{"email":"a@b.com"}"#));
}

#[tokio::test]
async fn post_auth_with_invalid_json_is_bad_request() {
    let (status, body) = send(Method::POST, "/api/auth", "{").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("invalid JSON body"));
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let (status, _) = send(Method::DELETE, "/api/auth", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, body) = send(Method::GET, "/healthz", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}
