pub(crate) mod client;
pub(crate) mod error;

pub use client::BacklogClient;
pub use error::{ClientError, Result as ClientResult};
