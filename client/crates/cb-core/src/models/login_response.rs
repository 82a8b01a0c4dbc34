use crate::models::lenient::{either_id, non_empty, opt_string_or_number};
use crate::{CoreError, CoreResult, Role, UserSession};

use serde::Deserialize;

const INVALID_USER_DATA: &str = "Invalid user data from API";

/// Body of a successful `POST /api/users/login`.
///
/// The backend may nest the identity under `user` or return it flat; the
/// token is always top-level.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<LoginUser>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "opt_string_or_number")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginUser {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "opt_string_or_number")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    /// Build a fully populated session record, or fail.
    ///
    /// Nested `user` fields win over top-level ones, and `id` wins over `_id`.
    /// A missing role means `user`. An unrecognised role, a missing id or a
    /// missing token is an error.
    #[track_caller]
    pub fn into_session(self) -> CoreResult<UserSession> {
        let user = self.user.unwrap_or_default();

        let id = either_id(user.id, user.mongo_id)
            .or_else(|| either_id(self.id, self.mongo_id));
        let token = non_empty(self.token);

        let (Some(id), Some(token)) = (id, token) else {
            return Err(CoreError::invalid_session(INVALID_USER_DATA));
        };

        let role = match non_empty(user.role).or_else(|| non_empty(self.role)) {
            Some(role) => role.parse::<Role>()?,
            None => Role::User,
        };

        Ok(UserSession {
            id,
            username: non_empty(user.username)
                .or_else(|| non_empty(self.username))
                .unwrap_or_default(),
            email: non_empty(user.email)
                .or_else(|| non_empty(self.email))
                .unwrap_or_default(),
            role,
            token,
        })
    }
}
