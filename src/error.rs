//! Error types for the forum API client
//!
//! Only transport and decoding failures are errors. An envelope whose `code`
//! is nonzero is a successful call at this layer and is returned as `Ok`.

use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request could not be built or sent, or the body could not be read
    Network(reqwest::Error),
    /// JSON serialization or parsing failed
    Json(serde_json::Error),
    /// Filesystem access failed
    Io(std::io::Error),
    /// The response body was not a JSON envelope
    Deserialization(String),
    /// The token store is unusable (poisoned lock)
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Deserialization(_) | AppError::Storage(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
