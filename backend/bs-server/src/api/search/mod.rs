pub mod search;
pub mod search_query;
