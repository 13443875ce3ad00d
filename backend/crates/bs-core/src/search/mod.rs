pub mod filter;
pub mod project_source;
pub mod search_proxy;
