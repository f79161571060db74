use log::{debug, info, warn};

use super::client::{FetcherConfig, HttpFetcher};
use super::error::ApiResult;
use crate::common::constants::{AUTHORS_PATH, POSTS_PATH};
use crate::common::{Author, Post};
use crate::settings::Settings;

/// Best-effort author source used by the enrichment stage.
pub trait AuthorLookup {
    /// Returns `None` on any failure; implementations must not panic or abort.
    fn get_author(&self, author_id: i64) -> Option<Author>;
}

pub struct PostRepository {
    base_url: String,
    fetcher: HttpFetcher,
}

impl PostRepository {
    pub fn new(base_url: &str, fetcher: HttpFetcher) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    pub fn from_settings(settings: &Settings) -> ApiResult<Self> {
        let fetcher = HttpFetcher::new(FetcherConfig::from(settings))?;
        Ok(Self::new(&settings.base_url, fetcher))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_posts(&self) -> ApiResult<Vec<Post>> {
        let url = format!("{}{}", self.base_url, POSTS_PATH);
        let posts: Vec<Post> = self.fetcher.fetch_json(&url)?;
        info!("Fetched {} posts from {}", posts.len(), url);
        Ok(posts)
    }

    pub fn fetch_author(&self, author_id: i64) -> ApiResult<Author> {
        let url = format!("{}{}/{}", self.base_url, AUTHORS_PATH, author_id);
        self.fetcher.fetch_json(&url)
    }
}

impl AuthorLookup for PostRepository {
    fn get_author(&self, author_id: i64) -> Option<Author> {
        match self.fetch_author(author_id) {
            Ok(author) => {
                debug!("Resolved author {} as '{}'", author_id, author.name);
                Some(author)
            }
            Err(e) => {
                warn!("Failed to fetch author {}: {}", author_id, e);
                None
            }
        }
    }
}
