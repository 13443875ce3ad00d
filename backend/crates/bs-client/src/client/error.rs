use bs_core::SearchError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while calling the upstream API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream status error: {message} (status: {status}) {location}")]
    Status {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context.
    /// The request URL is dropped because it carries the API key.
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let err = err.without_url();
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: format!("Invalid project list from upstream: {}", err),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a non-success status error with location
    #[track_caller]
    pub fn status(status: u16, message: String) -> Self {
        ClientError::Status {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Description suitable for the client-facing error payload
    pub fn message(&self) -> &str {
        match self {
            ClientError::Http { message, .. }
            | ClientError::Status { message, .. }
            | ClientError::Json { message, .. } => message,
        }
    }

    /// True when the request gave up waiting for the upstream
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http { source, .. } if source.is_timeout())
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for SearchError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        SearchError::upstream(err.message())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
