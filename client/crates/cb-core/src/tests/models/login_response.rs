use crate::{CoreError, LoginResponse, Role};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use serde_json::json;

fn parse(value: serde_json::Value) -> LoginResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn given_flat_response_when_into_session_then_all_fields_taken() {
    // Given
    let response = parse(json!({
        "id": "42",
        "username": "bob",
        "email": "bob@example.com",
        "role": "admin",
        "token": "jwt"
    }));

    // When
    let session = response.into_session().unwrap();

    // Then
    assert_that!(session.id.as_str(), eq("42"));
    assert_that!(session.username.as_str(), eq("bob"));
    assert_that!(session.email.as_str(), eq("bob@example.com"));
    assert_that!(session.role, eq(Role::Admin));
    assert_that!(session.token.as_str(), eq("jwt"));
}

#[test]
fn given_nested_user_when_into_session_then_nested_fields_win() {
    let response = parse(json!({
        "user": { "id": "nested", "username": "n", "email": "n@example.com", "role": "user" },
        "id": "flat",
        "username": "f",
        "token": "jwt"
    }));

    let session = response.into_session().unwrap();

    assert_that!(session.id.as_str(), eq("nested"));
    assert_that!(session.username.as_str(), eq("n"));
}

#[test]
fn given_mongo_style_id_when_into_session_then_accepted() {
    let response = parse(json!({ "user": { "_id": "abc" }, "token": "jwt" }));

    let session = response.into_session().unwrap();

    assert_that!(session.id.as_str(), eq("abc"));
}

#[test]
fn given_numeric_id_when_into_session_then_stringified() {
    let response = parse(json!({ "id": 7, "token": "jwt" }));

    assert_that!(response.into_session().unwrap().id.as_str(), eq("7"));
}

#[test]
fn given_missing_role_when_into_session_then_defaults_to_user() {
    let response = parse(json!({ "id": "1", "token": "jwt" }));

    assert_that!(response.into_session().unwrap().role, eq(Role::User));
}

#[test]
fn given_missing_token_when_into_session_then_error() {
    let response = parse(json!({ "id": "1", "role": "user" }));

    let result = response.into_session();

    assert_that!(result, err(anything()));
    assert_eq!(
        result.unwrap_err().message(),
        "Invalid user data from API"
    );
}

#[test]
fn given_empty_id_when_into_session_then_error() {
    let response = parse(json!({ "user": { "id": "" }, "id": "", "token": "jwt" }));

    assert!(matches!(
        response.into_session(),
        Err(CoreError::InvalidSession { .. })
    ));
}

#[test]
fn given_unknown_role_when_into_session_then_error() {
    let response = parse(json!({ "id": "1", "token": "jwt", "role": "owner" }));

    assert!(matches!(
        response.into_session(),
        Err(CoreError::InvalidRole { .. })
    ));
}

#[test]
fn given_empty_object_when_into_session_then_error() {
    assert_that!(parse(json!({})).into_session(), err(anything()));
}

#[test]
fn given_nested_user_with_both_id_keys_when_into_session_then_id_preferred() {
    // Given
    let response = parse(json!({
        "user": {
            "_id": "abc",
            "id": "abc-virtual",
            "username": "carol",
            "email": "carol@example.com",
            "role": "user"
        },
        "token": "t"
    }));

    // When
    let session = response.into_session().unwrap();

    // Then
    assert_that!(session.id.as_str(), eq("abc-virtual"));
    assert_that!(session.token.as_str(), eq("t"));
}

#[test]
fn given_only_mongo_id_when_into_session_then_it_is_used() {
    let response = parse(json!({ "_id": "m42", "role": "admin", "token": "t" }));

    let session = response.into_session().unwrap();

    assert_that!(session.id.as_str(), eq("m42"));
}
