//! Project search handler

use crate::{ApiResult, AppState, SearchQuery};

use bs_core::ProjectSummary;

use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
};
use log::info;

/// GET /search?keyword=<string>
///
/// Fetch the upstream project list and return the projects whose name
/// contains the keyword.
pub async fn search_projects(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<ProjectSummary>>> {
    if let Some(ref limiter) = state.rate_limiter {
        limiter.check(client.ip())?;
    }

    let query = SearchQuery::from_pairs(params);
    let keyword = query.keyword();
    let results = state.search.search(keyword).await?;
    info!(
        "Search {:?} from {} returned {} projects",
        keyword,
        client.ip(),
        results.len()
    );

    Ok(Json(results))
}
