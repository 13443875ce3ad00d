use crate::SearchRateLimiter;

use bs_config::RateLimitConfig;
use bs_core::{ProjectSource, SearchProxy};

use std::sync::Arc;

/// Shared, immutable per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub search: SearchProxy,
    /// `None` when rate limiting is disabled
    pub rate_limiter: Option<Arc<SearchRateLimiter>>,
}

impl AppState {
    pub fn new(source: Arc<dyn ProjectSource>, rate_limit: &RateLimitConfig) -> Self {
        let rate_limiter = rate_limit
            .enabled
            .then(|| Arc::new(SearchRateLimiter::new(rate_limit)));

        Self {
            search: SearchProxy::new(source),
            rate_limiter,
        }
    }
}
