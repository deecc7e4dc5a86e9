//! Error types for data loading.

/// Errors that can occur while loading items.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Network failure before a complete response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The response body was not a JSON array of objects.
    #[error("Malformed response: {message}")]
    Decode {
        /// Description of what failed to decode.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl LoadError {
    /// Creates a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a decode error carrying the offending body.
    pub fn decode_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body, if one was captured.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            Self::Decode { body, .. } => body.as_deref(),
            Self::Network(_) => None,
        }
    }

    /// Returns `true` if retrying the load could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Decode { .. } => false,
        }
    }
}
