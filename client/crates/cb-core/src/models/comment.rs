use crate::models::lenient::{either_id, null_as_default, opt_string_or_number};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "CommentRepr")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub user: CommentAuthor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "CommentAuthorRepr")]
pub struct CommentAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentRepr {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "opt_string_or_number")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    user: CommentAuthor,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Deserialize)]
struct CommentAuthorRepr {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "opt_string_or_number")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
}

impl TryFrom<CommentRepr> for Comment {
    type Error = String;

    fn try_from(repr: CommentRepr) -> Result<Self, Self::Error> {
        let id = either_id(repr.id, repr.mongo_id).ok_or("comment without an id")?;

        Ok(Self {
            id,
            content: repr.content,
            user: repr.user,
            created_at: repr.created_at,
        })
    }
}

impl From<CommentAuthorRepr> for CommentAuthor {
    fn from(repr: CommentAuthorRepr) -> Self {
        Self {
            id: either_id(repr.id, repr.mongo_id).unwrap_or_default(),
            name: repr.name,
        }
    }
}
