use shared_types::{ApiErrorBody, GENERIC_ERROR_MESSAGE};

/// Failure of a single API call. Surfaced to the calling view unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: u16,
        body: Option<ApiErrorBody>,
        raw: String,
    },
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status for non-2xx failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Message suitable for an error banner.
    pub fn friendly_message(&self) -> String {
        match self {
            ApiError::Status { body, status, .. } => body
                .as_ref()
                .and_then(|b| b.best_message().map(str::to_string))
                .unwrap_or_else(|| match status {
                    401 => "Your session has expired. Please sign in again.".to_string(),
                    403 => "You do not have access to this resource.".to_string(),
                    404 => "The requested record was not found.".to_string(),
                    _ => GENERIC_ERROR_MESSAGE.to_string(),
                }),
            ApiError::Transport { .. } => {
                "Unable to reach the server. Check your connection.".to_string()
            }
            ApiError::Decode { .. } => GENERIC_ERROR_MESSAGE.to_string(),
            ApiError::Cancelled => "Request cancelled.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, raw: &str) -> ApiError {
        ApiError::Status {
            url: "http://api/x".to_string(),
            status: code,
            body: ApiErrorBody::parse(raw),
            raw: raw.to_string(),
        }
    }

    #[test]
    fn friendly_message_prefers_server_message() {
        let err = status(409, r#"{"status":409,"message":"Phone number already registered"}"#);
        assert_eq!(err.friendly_message(), "Phone number already registered");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn friendly_message_falls_back_by_status() {
        assert!(status(401, "").friendly_message().contains("sign in"));
        assert!(status(404, "nope").friendly_message().contains("not found"));
        assert_eq!(status(502, "<html>").friendly_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn unauthorized_covers_401_and_403() {
        assert!(status(401, "").is_unauthorized());
        assert!(status(403, "").is_unauthorized());
        assert!(!status(500, "").is_unauthorized());
        assert!(!ApiError::Cancelled.is_unauthorized());
        assert!(ApiError::Cancelled.is_cancelled());
    }
}
