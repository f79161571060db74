mod client;
mod decoder;
mod error;
mod repository;

pub use client::{FetcherConfig, HttpFetcher};
pub use decoder::decode;
pub use error::{ApiError, ApiResult};
pub use repository::{AuthorLookup, PostRepository};
