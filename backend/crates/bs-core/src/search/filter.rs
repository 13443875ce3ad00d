//! Keyword selection over an upstream project list.

use crate::{Project, ProjectSummary};

/// Case-insensitive substring test of `keyword` against `name`.
/// An empty keyword matches every name.
pub fn matches_keyword(keyword: &str, name: &str) -> bool {
    name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Keep the projects whose name contains `keyword` (case-insensitive) and
/// reshape them into summaries. Upstream order is preserved.
pub fn filter_projects(keyword: &str, projects: Vec<Project>) -> Vec<ProjectSummary> {
    projects
        .into_iter()
        .filter(|project| matches_keyword(keyword, &project.name))
        .map(ProjectSummary::from)
        .collect()
}
