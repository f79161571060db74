use indicatif::ProgressBar;
use log::debug;
use std::thread;

use crate::api::AuthorLookup;
use crate::common::Post;

/// Fills in missing author names and avatars through an [`AuthorLookup`].
///
/// Lookups are spread over scoped worker threads, each owning a contiguous
/// chunk of the input, and the chunks are stitched back together in order.
pub struct Enricher<'a, L> {
    lookup: &'a L,
    workers: usize,
    progress: ProgressBar,
}

impl<'a, L: AuthorLookup + Sync> Enricher<'a, L> {
    pub fn new(lookup: &'a L, workers: usize) -> Self {
        Self {
            lookup,
            workers: workers.max(1),
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Returns one post per input post, in input order.
    pub fn enrich(&self, posts: &[Post]) -> Vec<Post> {
        if self.workers == 1 || posts.len() <= 1 {
            return posts.iter().map(|post| self.enrich_one(post)).collect();
        }

        let chunk_size = posts.len().div_ceil(self.workers);
        debug!(
            "Enriching {} posts on {} workers",
            posts.len(),
            posts.len().div_ceil(chunk_size)
        );

        thread::scope(|scope| {
            let handles: Vec<_> = posts
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|post| self.enrich_one(post))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(enriched) => enriched,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }

    fn enrich_one(&self, post: &Post) -> Post {
        let enriched = match post.author_id {
            Some(author_id) if post.needs_enrichment() => {
                let author = self.lookup.get_author(author_id);
                post.with_author(author.as_ref())
            }
            _ => post.clone(),
        };
        self.progress.inc(1);
        enriched
    }
}

/// Counts of posts that needed an author lookup and how many got one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub total: usize,
    pub eligible: usize,
    pub resolved: usize,
}

impl EnrichmentSummary {
    pub fn from_posts(before: &[Post], after: &[Post]) -> Self {
        let mut summary = Self {
            total: before.len(),
            ..Self::default()
        };

        for (original, enriched) in before.iter().zip(after) {
            if original.needs_enrichment() {
                summary.eligible += 1;
                if enriched.author_name.is_some() {
                    summary.resolved += 1;
                }
            }
        }

        summary
    }

    pub fn failed(&self) -> usize {
        self.eligible.saturating_sub(self.resolved)
    }
}
