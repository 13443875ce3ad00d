pub mod created_user;
pub mod project;
pub mod project_summary;
