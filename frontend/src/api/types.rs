use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

impl std::fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("token", &"***")
            .field("new_password", &"***")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyEmailQuery {
    pub token: String,
}

impl std::fmt::Debug for VerifyEmailQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyEmailQuery")
            .field("token", &"***")
            .finish()
    }
}

/// Error body returned by the authentication service.
///
/// `detail` is usually a plain message, but validation failures arrive as a
/// list of `{ "loc": [...], "msg": "..." }` objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// The `detail` field when the service sent a single message.
    pub fn phrase(&self) -> Option<&str> {
        self.detail.as_ref().and_then(Value::as_str)
    }

    /// Human readable text for any shape of `detail`.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw `detail` phrase from the service, kept verbatim for classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub const HTTP_ERROR: &'static str = "HTTP_ERROR";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";

    /// A non-2xx response. `error` holds the readable detail when there is one.
    pub fn http(status: u16, body: Option<ErrorBody>) -> Self {
        let detail = body
            .as_ref()
            .and_then(ErrorBody::phrase)
            .map(str::to_string);
        let error = body
            .as_ref()
            .and_then(ErrorBody::message)
            .unwrap_or_default();
        Self {
            error,
            code: Self::HTTP_ERROR.to_string(),
            status: Some(status),
            detail,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::REQUEST_FAILED.to_string(),
            status: None,
            detail: None,
        }
    }

    /// Message for the user, or `fallback` when the service said nothing useful.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.error.trim().is_empty() {
            fallback.to_string()
        } else {
            self.error.clone()
        }
    }
}
