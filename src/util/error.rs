use serde_json::Value as JsonValue;
use thiserror::Error;

/// A failed API call, described for display.
///
/// Built from the loosely-typed error object an HTTP client hands back
/// (`{ "response": { "data": { "message": .. } }, "request": .., "message": .. }`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with an error body carrying a message.
    #[error("{0}")]
    Server(String),
    /// The server answered but said nothing useful.
    #[error("Server error occurred")]
    ServerUnknown,
    /// A request was sent and nothing came back.
    #[error("No response from server")]
    NoResponse,
    /// The client failed before talking to the server.
    #[error("{0}")]
    Client(String),
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl ApiError {
    /// Classify an error object by priority: server response, missing
    /// response, own message, generic fallback.
    pub fn from_json(error: &JsonValue) -> Self {
        if let Some(response) = error.get("response").filter(|v| is_truthy(v)) {
            return match non_empty_str(response.pointer("/data/message")) {
                Some(msg) => ApiError::Server(msg.to_string()),
                None => ApiError::ServerUnknown,
            };
        }
        if error.get("request").is_some_and(is_truthy) {
            return ApiError::NoResponse;
        }
        match non_empty_str(error.get("message")) {
            Some(msg) => ApiError::Client(msg.to_string()),
            None => ApiError::Unexpected,
        }
    }
}

/// Human-readable message for an API error object.
pub fn handle_api_error(error: &JsonValue) -> String {
    ApiError::from_json(error).to_string()
}

fn non_empty_str(val: Option<&JsonValue>) -> Option<&str> {
    val.and_then(JsonValue::as_str).filter(|s| !s.is_empty())
}

fn is_truthy(val: &JsonValue) -> bool {
    match val {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
