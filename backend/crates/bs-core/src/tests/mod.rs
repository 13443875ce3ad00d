mod search;

use crate::{Project, ProjectSource, Result as SearchResult, SearchError};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// In-memory project source that counts how often it is called
pub(crate) struct StaticSource {
    outcome: Result<Vec<Project>, String>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub(crate) fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            outcome: Ok(projects),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectSource for StaticSource {
    async fn list_projects(&self) -> SearchResult<Vec<Project>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Ok(projects) => Ok(projects.clone()),
            Err(message) => Err(SearchError::upstream(message.clone())),
        }
    }
}

/// The three-project list used throughout the search tests
pub(crate) fn apollo_zeus() -> Vec<Project> {
    vec![
        Project::new(1, "Apollo"),
        Project::new(2, "apollo II"),
        Project::new(3, "Zeus"),
    ]
}
