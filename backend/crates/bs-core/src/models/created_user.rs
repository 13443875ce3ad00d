use serde::{Deserialize, Serialize};

/// The `createdUser` object embedded in an upstream project.
/// Only the display name is used; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatedUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
