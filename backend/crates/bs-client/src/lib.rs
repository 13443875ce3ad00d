//! bs-client library
//!
//! HTTP client for the upstream Backlog REST API.

pub(crate) mod client;


pub use client::{BacklogClient, ClientError, ClientResult};
