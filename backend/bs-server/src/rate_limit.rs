use crate::{ApiError, ApiResult};

use bs_config::RateLimitConfig;

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Per-client limiter for the search endpoint, keyed by remote IP.
///
/// Each client gets a burst of `max_requests`, replenished evenly over
/// `window_secs`.
pub struct SearchRateLimiter {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
    max_requests: u32,
    window_secs: u64,
}

impl SearchRateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            max_requests: burst.get(),
            window_secs: config.window_secs,
        }
    }

    /// Check if a request from `client` is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self, client: IpAddr) -> ApiResult<()> {
        self.limiter.check_key(&client).map_err(|_| ApiError::RateLimited {
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Forget clients whose bucket has refilled completely.
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs.max(1))
    }
}
