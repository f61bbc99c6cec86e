//! Error types for talking to the class API.

use thiserror::Error;

/// Errors that can occur while reading from or writing to the class API.
#[derive(Debug, Error, Clone)]
pub enum SourceError {
    /// Network/HTTP request failed
    #[error("Network error: {message}")]
    Network { message: String },

    /// Server answered a read with a non-success status
    #[error("Unexpected response from {resource}: {message}")]
    UnexpectedResponse { resource: String, message: String },

    /// Response body could not be decoded into the expected shape
    #[error("Could not decode {resource}: {message}")]
    Decode { resource: String, message: String },

    /// Base URL parsing/construction failed
    #[error("URL error: {message}")]
    UrlError { message: String },
}

impl SourceError {
    /// Returns true if the request never produced a usable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, SourceError::Network { .. })
    }

    pub(crate) fn decode(resource: &str, err: impl std::fmt::Display) -> Self {
        SourceError::Decode {
            resource: resource.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::UrlError {
            message: err.to_string(),
        }
    }
}
