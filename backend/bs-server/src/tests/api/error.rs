use crate::ApiError;

use bs_core::SearchError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_upstream_error_returns_200_with_error_body() {
    let error = ApiError::Upstream {
        message: "Upstream returned HTTP 500 Internal Server Error".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "error": "Upstream returned HTTP 500 Internal Server Error" })
    );
}

#[tokio::test]
async fn test_rate_limited_returns_429_with_error_body() {
    let error = ApiError::RateLimited {
        max_requests: 30,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        json["error"],
        "Too many search requests, please try again after 60 seconds."
    );
}

#[test]
fn test_search_error_converts_to_upstream() {
    let error = ApiError::from(SearchError::upstream("connection refused"));

    match error {
        ApiError::Upstream { message, .. } => assert_eq!(message, "connection refused"),
        other => panic!("expected upstream error, got {other:?}"),
    }
}
