//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Fetch Errors (recipe API and image loads)
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Server returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Empty response body from {url}")]
    EmptyPayload { url: String },

    #[error("Failed to decode image: {message}")]
    ImageDecode { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// The four failure categories a fetch can end in.
///
/// Every category is handled the same way (log, keep prior state), the
/// classification only feeds log lines and headless `error` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    InvalidUrl,
    Transport,
    Decode,
    EmptyPayload,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "invalid_url",
            FetchErrorKind::Transport => "transport",
            FetchErrorKind::Decode => "decode",
            FetchErrorKind::EmptyPayload => "empty_payload",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn empty_payload(url: impl Into<String>) -> Self {
        Self::EmptyPayload { url: url.into() }
    }

    pub fn image_decode(message: impl Into<String>) -> Self {
        Self::ImageDecode {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Classify a fetch failure. Returns `None` for errors that never come
    /// out of a fetch (terminal, config).
    pub fn fetch_kind(&self) -> Option<FetchErrorKind> {
        match self {
            Error::InvalidUrl { .. } => Some(FetchErrorKind::InvalidUrl),
            Error::Transport { .. } | Error::HttpStatus { .. } | Error::Io(_) => {
                Some(FetchErrorKind::Transport)
            }
            Error::Decode { .. } | Error::Json(_) | Error::ImageDecode { .. } => {
                Some(FetchErrorKind::Decode)
            }
            Error::EmptyPayload { .. } => Some(FetchErrorKind::EmptyPayload),
            _ => None,
        }
    }
}
