use crate::Project;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TYPE: &str = "N/A";
pub const DEFAULT_CONTENT_SUMMARY: &str = "No Summary";
pub const DEFAULT_CREATED_USER_NAME: &str = "N/A";
pub const DEFAULT_CREATED: &str = "N/A";

/// Reshaped search result returned to the caller.
///
/// Field names on the wire are fixed by existing clients, hence the
/// mixed `type` / `createdUser_name` renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub project_name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub content_summary: String,
    #[serde(rename = "createdUser_name")]
    pub created_user_name: String,
    pub created: String,
}

impl From<Project> for ProjectSummary {
    fn from(p: Project) -> Self {
        let created_user_name = p
            .created_user_name()
            .unwrap_or(DEFAULT_CREATED_USER_NAME)
            .to_string();

        Self {
            id: p.id,
            project_name: p.name,
            project_type: p.project_key.unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            content_summary: p
                .text
                .unwrap_or_else(|| DEFAULT_CONTENT_SUMMARY.to_string()),
            created_user_name,
            created: p.created.unwrap_or_else(|| DEFAULT_CREATED.to_string()),
        }
    }
}
