use crate::ApiMessage;

use serde_json::json;

#[test]
fn test_from_body_reads_message() {
    let msg = ApiMessage::from_body(&json!({ "message": "Email already used" }));
    assert_eq!(msg.message.as_deref(), Some("Email already used"));
}

#[test]
fn test_from_body_without_message_uses_fallback() {
    let msg = ApiMessage::from_body(&json!({ "error": true }));
    assert_eq!(msg.or("Login failed"), "Login failed");
}

#[test]
fn test_empty_message_uses_fallback() {
    let msg = ApiMessage::from_body(&json!({ "message": "" }));
    assert_eq!(msg.or("Registration failed"), "Registration failed");
}

#[test]
fn test_mentions_token() {
    assert!(ApiMessage::from_body(&json!({ "message": "No token provided" })).mentions_token());
    assert!(ApiMessage::from_body(&json!({ "message": "Invalid Token" })).mentions_token());
    assert!(!ApiMessage::from_body(&json!({ "message": "Recipe not found" })).mentions_token());
    assert!(!ApiMessage::default().mentions_token());
}
