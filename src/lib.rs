//! Fetches posts from the posts API, fills in missing author details and
//! renders a plain-text digest.

pub mod api;
pub mod common;
pub mod enrichment;
pub mod post_renderer;
pub mod settings;

pub use api::{ApiError, AuthorLookup, PostRepository};
pub use common::{Attachment, AttachmentType, Author, Post};
pub use enrichment::{Enricher, EnrichmentSummary};
pub use settings::Settings;
