use crate::{Project, Result as SearchResult};

use async_trait::async_trait;

/// Where the full project list comes from.
///
/// Implementations perform exactly one read-only upstream call per
/// invocation and map every failure to `SearchError::UpstreamFailure`.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn list_projects(&self) -> SearchResult<Vec<Project>>;
}
