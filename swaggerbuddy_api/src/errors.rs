//! Error types for the API client.

/// Errors that can occur when talking to the backend.
///
/// The `Display` text of every variant is the message shown to the user, so
/// callers can surface `err.to_string()` directly.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never got a response (connection refused, DNS, reset).
    #[error("Network error - please check your connection and ensure the API server is running")]
    Network,
    /// The request exceeded the transport timeout.
    #[error("Request timeout")]
    Timeout,
    /// The backend answered HTTP 404.
    #[error("Resource not found")]
    NotFound,
    /// The backend answered HTTP 500.
    #[error("Internal server error")]
    InternalServerError,
    /// Any other non-success HTTP status. `message` is the backend's own
    /// message when the body carried one.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },
    /// HTTP succeeded but the envelope reported a failure.
    #[error("{0}")]
    Rejected(String),
    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(String),
    /// The request could not be built (bad base URL, bad MIME type).
    #[error("{0}")]
    InvalidRequest(String),
}

impl Error {
    /// HTTP status associated with this error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::InternalServerError => Some(500),
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Maps a transport error from `reqwest` onto the user-facing variants.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network
        }
    }

    /// Maps a non-success HTTP status and its raw body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        match status {
            404 => Self::NotFound,
            500 => Self::InternalServerError,
            _ => {
                let message = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("Request failed with status code {}", status));
                Self::HttpStatus { status, message }
            }
        }
    }
}
