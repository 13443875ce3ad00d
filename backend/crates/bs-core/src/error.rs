use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The upstream call failed: transport error, timeout, non-2xx status,
    /// or a body that is not a JSON array of projects.
    #[error("Upstream failure: {message} {location}")]
    UpstreamFailure {
        message: String,
        location: ErrorLocation,
    },
}

impl SearchError {
    /// Create an upstream failure
    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        SearchError::UpstreamFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing description, without the source location
    pub fn message(&self) -> &str {
        match self {
            SearchError::UpstreamFailure { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, SearchError>;
