use crate::{ProjectSource, ProjectSummary, Result as SearchResult, filter_projects};

use std::sync::Arc;

use log::debug;

/// Fetches the upstream project list and filters it by keyword
#[derive(Clone)]
pub struct SearchProxy {
    source: Arc<dyn ProjectSource>,
}

impl SearchProxy {
    pub fn new(source: Arc<dyn ProjectSource>) -> Self {
        Self { source }
    }

    /// Search projects by name.
    ///
    /// Either the full filtered list is returned or the upstream failure is;
    /// there are no partial results and no retries.
    pub async fn search(&self, keyword: &str) -> SearchResult<Vec<ProjectSummary>> {
        let projects = self.source.list_projects().await?;
        let total = projects.len();

        let results = filter_projects(keyword, projects);
        debug!(
            "Keyword {:?} matched {} of {} projects",
            keyword,
            results.len(),
            total
        );

        Ok(results)
    }
}
