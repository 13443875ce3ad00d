mod config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod upstream_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use upstream_config::UpstreamConfig;

const CONFIG_DIR_ENV: &str = "BS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".bs";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const MIN_UPSTREAM_TIMEOUT_SECS: u64 = 1;
const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 300;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

const DEFAULT_RATE_LIMIT_ENABLED: bool = true;
const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
const MAX_RATE_LIMIT_REQUESTS: u32 = 10000;
const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 30;
const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
