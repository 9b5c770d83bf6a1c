use serde_json::json;

use super::*;

#[tokio::test]
async fn placeholder_describe_is_not_implemented() {
    let reply = PlaceholderAuth.describe().await.unwrap();
    assert_eq!(reply, AuthReply::NotImplemented { received: None });
}

#[tokio::test]
async fn placeholder_submit_echoes_body() {
    let reply = PlaceholderAuth.submit(json!({ "email": "a@b.com" })).await.unwrap();
    assert_eq!(reply, AuthReply::NotImplemented { received: Some(json!({ "email": "a@b.com" })) });
}

#[test]
fn reply_converts_to_wire_response() {
    let wire: AuthApiResponse = AuthReply::NotImplemented { received: Some(json!({ "x": 1 })) }.into();
    assert_eq!(
        serde_json::to_value(&wire).unwrap(),
        json!({ "message": "Auth API - Phase 2", "received": { "x": 1 }, "status": "not_implemented" })
    );
}

#[test]
fn parse_body_accepts_any_json_value() {
    assert_eq!(parse_body(br#"{"x":1}"#).unwrap(), json!({ "x": 1 }));
    assert_eq!(parse_body(b"[1,2]").unwrap(), json!([1, 2]));
    assert_eq!(parse_body(b"null").unwrap(), Value::Null);
}

#[test]
fn parse_body_rejects_non_json() {
    assert!(matches!(parse_body(b"email=a@b.com"), Err(AuthError::InvalidBody(_))));
    assert!(matches!(parse_body(b""), Err(AuthError::InvalidBody(_))));
}
