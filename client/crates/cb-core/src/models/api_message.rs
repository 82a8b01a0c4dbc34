use serde_json::Value;

/// Error body shape shared by every backend endpoint: `{ "message": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiMessage {
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn from_body(body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .filter(|m| !m.is_empty())
            .map(String::from);
        Self { message }
    }

    /// Backend message, or `fallback` when the body carried none.
    pub fn or(self, fallback: &str) -> String {
        self.message.unwrap_or_else(|| fallback.to_string())
    }

    /// Whether the backend is complaining about the bearer credential.
    pub fn mentions_token(&self) -> bool {
        self.message
            .as_deref()
            .is_some_and(|m| m.to_lowercase().contains("token"))
    }
}
