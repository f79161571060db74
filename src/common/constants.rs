/// Base URL of the posts API
pub const DEFAULT_BASE_URL: &str = "http://localhost:9999";

/// Default connect timeout for HTTP requests in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default deadline for a whole HTTP request (connect, headers and body) in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Default number of threads used for author lookups
pub const ENRICHMENT_WORKERS: usize = 4;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("post-digest/", env!("CARGO_PKG_VERSION"));

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "settings.json";

/// API paths
pub const POSTS_PATH: &str = "/api/posts";
pub const AUTHORS_PATH: &str = "/api/authors";

/// Shown in place of a missing author name
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Number of content characters shown per post
pub const CONTENT_PREVIEW_CHARS: usize = 30;

/// Progress bar template
pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Progress bar characters
pub const PROGRESS_BAR_CHARS: &str = "#>-";
