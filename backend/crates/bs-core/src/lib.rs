pub mod error;
pub mod models;
pub mod search;

pub use error::{Result, SearchError};
pub use models::created_user::CreatedUser;
pub use models::project::Project;
pub use models::project_summary::{
    DEFAULT_CONTENT_SUMMARY, DEFAULT_CREATED, DEFAULT_CREATED_USER_NAME, DEFAULT_TYPE,
    ProjectSummary,
};
pub use search::filter::{filter_projects, matches_keyword};
pub use search::project_source::ProjectSource;
pub use search::search_proxy::SearchProxy;

#[cfg(test)]
mod tests;
