//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer.
///
/// Every variant displays as a plain message that can be shown to the user
/// unchanged; API failures keep the client's normalized wording.
#[derive(Debug)]
pub enum SwaggerBuddyError {
    /// An error from the underlying API client.
    Api(swaggerbuddy_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// Reading a local file failed.
    Io(std::io::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for SwaggerBuddyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::InvalidInput(msg) => write!(f, "{}", msg),
            Self::Io(e) => write!(f, "File error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for SwaggerBuddyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<swaggerbuddy_api::Error> for SwaggerBuddyError {
    fn from(e: swaggerbuddy_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<std::io::Error> for SwaggerBuddyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SwaggerBuddyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
