use crate::tests::{StaticSource, apollo_zeus};
use crate::{SearchError, SearchProxy};

use std::sync::Arc;

#[tokio::test]
async fn test_search_filters_upstream_list() {
    let source = Arc::new(StaticSource::with_projects(apollo_zeus()));
    let proxy = SearchProxy::new(source.clone());

    let results = proxy.search("apollo").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, 1);
    assert_eq!(results[1].id, 2);
}

#[tokio::test]
async fn test_search_calls_upstream_exactly_once() {
    let source = Arc::new(StaticSource::with_projects(apollo_zeus()));
    let proxy = SearchProxy::new(source.clone());

    proxy.search("").await.unwrap();
    assert_eq!(source.calls(), 1);

    proxy.search("zeus").await.unwrap();
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_search_propagates_upstream_failure() {
    let source = Arc::new(StaticSource::failing("connection refused"));
    let proxy = SearchProxy::new(source.clone());

    let result = proxy.search("apollo").await;

    let err = result.unwrap_err();
    assert!(matches!(err, SearchError::UpstreamFailure { .. }));
    assert_eq!(err.message(), "connection refused");
    assert_eq!(source.calls(), 1);
}

#[test]
fn test_upstream_error_display_includes_message() {
    let err = SearchError::upstream("HTTP 500");

    assert!(err.to_string().contains("Upstream failure: HTTP 500"));
}
