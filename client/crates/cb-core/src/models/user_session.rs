use crate::models::lenient::{non_empty, opt_string_or_number};
use crate::{CoreError, CoreResult, Role};

use std::fmt;

use serde::{Deserialize, Serialize};

/// The signed-in user's identity and bearer credential.
///
/// A value of this type always satisfies the session invariant: `id`,
/// `token` and `role` are present and non-empty. The only ways to build one
/// from untrusted input are [`UserSession::from_persisted`] and
/// [`crate::LoginResponse::into_session`].
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// Loose shape of a stored session blob, before validation.
#[derive(Deserialize)]
struct StoredSession {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    token: Option<String>,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Value for the `Authorization` header of authenticated requests.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Parse and validate a session record read back from the persisted store.
    #[track_caller]
    pub fn from_persisted(json: &str) -> CoreResult<Self> {
        let stored: StoredSession = serde_json::from_str(json)?;

        let id = required("id", stored.id)?;
        let token = required("token", stored.token)?;
        let role = required("role", stored.role)?.parse::<Role>()?;

        Ok(Self {
            id,
            username: stored.username.unwrap_or_default(),
            email: stored.email.unwrap_or_default(),
            role,
            token,
        })
    }

    /// Serialized form written to the persisted store.
    pub fn to_persisted(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[track_caller]
fn required(field: &str, value: Option<String>) -> CoreResult<String> {
    non_empty(value).ok_or_else(|| CoreError::invalid_session(format!("missing {field}")))
}

impl fmt::Debug for UserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSession")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("token", &"<redacted>")
            .finish()
    }
}
