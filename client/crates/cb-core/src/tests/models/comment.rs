use crate::Comment;

use serde_json::json;

#[test]
fn test_comment_deserializes_backend_shape() {
    let comment: Comment = serde_json::from_value(json!({
        "_id": "m1",
        "content": "Delicious",
        "user": { "_id": "u2", "name": "Bao" },
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(comment.id, "m1");
    assert_eq!(comment.user.id, "u2");
    assert_eq!(comment.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
}

#[test]
fn test_comment_with_both_id_keys_prefers_id() {
    let comment: Comment = serde_json::from_value(json!({
        "_id": "m1",
        "id": "m1-virtual",
        "content": "Great",
        "user": { "_id": "u2", "id": "u2", "name": "Bao" }
    }))
    .unwrap();

    assert_eq!(comment.id, "m1-virtual");
    assert_eq!(comment.user.id, "u2");
}

#[test]
fn test_comment_null_author_reads_as_default() {
    let comment: Comment =
        serde_json::from_value(json!({ "_id": "m1", "content": "Hi", "user": null })).unwrap();

    assert_eq!(comment.user.name, "");
}
