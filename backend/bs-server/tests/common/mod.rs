#![allow(dead_code)]

//! Test infrastructure for bs-server API tests

use bs_client::BacklogClient;
use bs_config::RateLimitConfig;
use bs_server::{AppState, build_router};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-api-key";
pub const PROJECTS_PATH: &str = "/api/v2/projects";

/// The three-project list used by the search scenarios
pub fn apollo_zeus() -> Value {
    json!([
        { "name": "Apollo", "id": 1 },
        { "name": "apollo II", "id": 2 },
        { "name": "Zeus", "id": 3 }
    ])
}

/// Start a mock upstream answering the project list with `response`
pub async fn start_upstream(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PROJECTS_PATH))
        .and(query_param("apiKey", API_KEY))
        .respond_with(response)
        .mount(&server)
        .await;

    server
}

/// Start a mock upstream answering 200 with the given JSON body
pub async fn start_upstream_json(body: Value) -> MockServer {
    start_upstream(ResponseTemplate::new(200).set_body_json(body)).await
}

fn client_for(upstream: &MockServer) -> BacklogClient {
    BacklogClient::new(
        &format!("{}/api/v2", upstream.uri()),
        API_KEY,
        Duration::from_secs(5),
    )
    .expect("Failed to build upstream client")
}

/// AppState pointed at the mock upstream, rate limiting disabled
pub fn create_test_app_state(upstream: &MockServer) -> AppState {
    AppState::new(
        Arc::new(client_for(upstream)),
        &RateLimitConfig {
            enabled: false,
            ..RateLimitConfig::default()
        },
    )
}

/// AppState pointed at the mock upstream with a small search burst
pub fn create_rate_limited_app_state(upstream: &MockServer, max_requests: u32) -> AppState {
    AppState::new(
        Arc::new(client_for(upstream)),
        &RateLimitConfig {
            enabled: true,
            max_requests,
            window_secs: 60,
        },
    )
}

/// Remote address reported for requests made by the default test client
pub const TEST_CLIENT: ([u8; 4], u16) = ([127, 0, 0, 1], 40000);

/// Router as served, with requests appearing to come from `client`
pub fn test_router(state: AppState, client: impl Into<SocketAddr>) -> Router {
    build_router(state).layer(MockConnectInfo(client.into()))
}

/// Send a GET through an already built router and return the status
pub async fn get_status(app: &Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}

/// Send a GET through the router and return status and raw body
pub async fn get_raw(state: AppState, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let app = test_router(state, TEST_CLIENT);

    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body.to_vec())
}

/// Send a GET through the router and parse the body as JSON
pub async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get_raw(state, uri).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}
