use crate::{CoreError, Role, UserSession};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};

fn sample() -> UserSession {
    UserSession {
        id: "u-1".into(),
        username: "alice".into(),
        email: "alice@example.com".into(),
        role: Role::Admin,
        token: "secret-token".into(),
    }
}

// =========================================================================
// Persisted record validation
// =========================================================================

#[test]
fn given_id_token_and_role_when_from_persisted_then_adopted() {
    // Given
    let json = r#"{"id":"1","token":"t","role":"user"}"#;

    // When
    let result = UserSession::from_persisted(json);

    // Then
    assert_that!(result, ok(anything()));
    let session = result.unwrap();
    assert_that!(session.id.as_str(), eq("1"));
    assert_that!(session.token.as_str(), eq("t"));
    assert_that!(session.role, eq(Role::User));
    assert_that!(session.username.as_str(), eq(""));
}

#[test]
fn given_only_id_when_from_persisted_then_rejected() {
    let result = UserSession::from_persisted(r#"{"id":"1"}"#);

    assert_that!(result, err(anything()));
}

#[test]
fn given_missing_id_when_from_persisted_then_rejected() {
    let result = UserSession::from_persisted(r#"{"token":"t","role":"user"}"#);

    assert!(matches!(result, Err(CoreError::InvalidSession { .. })));
}

#[test]
fn given_empty_token_when_from_persisted_then_rejected() {
    let result = UserSession::from_persisted(r#"{"id":"1","token":"","role":"user"}"#);

    assert_that!(result, err(anything()));
}

#[test]
fn given_unknown_role_when_from_persisted_then_rejected() {
    let result = UserSession::from_persisted(r#"{"id":"1","token":"t","role":"root"}"#);

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn given_garbage_when_from_persisted_then_json_error() {
    let result = UserSession::from_persisted("not json at all");

    assert!(matches!(result, Err(CoreError::Json { .. })));
}

#[test]
fn given_null_when_from_persisted_then_rejected() {
    assert_that!(UserSession::from_persisted("null"), err(anything()));
}

#[test]
fn given_session_when_to_persisted_then_from_persisted_restores_it() {
    let session = sample();

    let json = session.to_persisted().unwrap();
    let restored = UserSession::from_persisted(&json).unwrap();

    assert_eq!(restored, session);
}

// =========================================================================
// Accessors
// =========================================================================

#[test]
fn test_bearer_header() {
    assert_eq!(sample().bearer_header(), "Bearer secret-token");
}

#[test]
fn test_is_admin_follows_role() {
    let mut session = sample();
    assert!(session.is_admin());

    session.role = Role::User;
    assert!(!session.is_admin());
}

#[test]
fn given_session_when_debug_formatted_then_token_redacted() {
    let rendered = format!("{:?}", sample());

    assert_that!(rendered, contains_substring("<redacted>"));
    assert!(!rendered.contains("secret-token"));
}
