pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod rate_limit;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    index::index,
    search::{search::search_projects, search_query::SearchQuery},
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use rate_limit::SearchRateLimiter;

pub use crate::routes::build_router;
