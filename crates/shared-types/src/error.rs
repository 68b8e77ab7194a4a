use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fallback shown when a failure carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Error body returned by the REST API on non-2xx responses.
///
/// Every field is optional: the API returns Spring-style bodies
/// (`status`, `error`, `message`, `path`) but proxies and gateways may
/// answer with something else entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl ApiErrorBody {
    /// Parse an error body from raw response text.
    ///
    /// Accepts raw JSON or text with a JSON object embedded between the
    /// first `{` and last `}`. Returns `None` if nothing parses.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(body) = serde_json::from_str::<Self>(raw) {
            return Some(body);
        }
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if end > start {
            serde_json::from_str(&raw[start..=end]).ok()
        } else {
            None
        }
    }

    /// The most specific human-readable text in the body.
    pub fn best_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.trim().is_empty()))
    }

    /// Message suitable for an error banner.
    pub fn friendly_message(raw: &str) -> String {
        Self::parse(raw)
            .and_then(|b| b.best_message().map(str::to_string))
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.best_message()) {
            (Some(status), Some(msg)) => write!(f, "{status}: {msg}"),
            (None, Some(msg)) => f.write_str(msg),
            (Some(status), None) => write!(f, "HTTP {status}"),
            (None, None) => f.write_str(GENERIC_ERROR_MESSAGE),
        }
    }
}

/// Generic `{ "message": "..." }` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
