//! Project record as returned by the upstream "list projects" endpoint.

use crate::CreatedUser;

use serde::{Deserialize, Serialize};

/// An upstream project.
///
/// The upstream owns this shape, so only `id` and `name` are required.
/// Optional fields that are absent or `null` deserialize to `None`, and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Short project key (e.g., "APOLLO")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_user: Option<CreatedUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Project {
    /// Create a project with only the required fields set
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            project_key: None,
            text: None,
            created_user: None,
            created: None,
        }
    }

    /// Name of the user who created the project, if the upstream sent one
    pub fn created_user_name(&self) -> Option<&str> {
        self.created_user
            .as_ref()
            .and_then(|user| user.name.as_deref())
    }
}
