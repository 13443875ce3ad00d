//! REST API error types
//!
//! Every error still produces a JSON body of the form `{"error": "..."}`.
//! Upstream failures keep HTTP 200 because existing clients tell success
//! from failure by body shape only.

use bs_core::SearchError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream call or decode failed (200, error payload)
    #[error("Upstream failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Too many search requests (429)
    #[error("Rate limit exceeded: {max_requests} per {window_secs}s {location}")]
    RateLimited {
        max_requests: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Upstream { message, location } => {
                log::error!("Search failed: {} {}", message, location);
                (StatusCode::OK, message)
            }
            ApiError::RateLimited {
                max_requests,
                window_secs,
                location,
            } => {
                log::warn!(
                    "Search rate limit exceeded: {} per {}s {}",
                    max_requests,
                    window_secs,
                    location
                );
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    format!(
                        "Too many search requests, please try again after {} seconds.",
                        window_secs
                    ),
                )
            }
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert search errors to API errors
impl From<SearchError> for ApiError {
    #[track_caller]
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UpstreamFailure { message, .. } => ApiError::Upstream {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
