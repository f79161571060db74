use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::time::Instant;

use post_digest::common::constants::{PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE, SETTINGS_FILE};
use post_digest::post_renderer::render_report;
use post_digest::{Enricher, EnrichmentSummary, PostRepository, Settings};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        error!("Error: {:#}", e);
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let start_time = Instant::now();
    info!("Post Digest v{} starting up...", env!("CARGO_PKG_VERSION"));

    debug!("Loading application settings...");
    let settings = Settings::load(SETTINGS_FILE)?;

    let repository = PostRepository::from_settings(&settings)
        .context("Failed to initialise the posts API client")?;

    info!("Fetching posts from {}...", repository.base_url());
    let posts = repository.get_posts().context("Failed to fetch posts")?;

    info!("Enriching posts with author info...");
    let pb = create_progress_bar(posts.len(), settings.show_progress);
    let enriched = Enricher::new(&repository, settings.enrichment_workers)
        .with_progress(pb.clone())
        .enrich(&posts);
    pb.finish_and_clear();

    log_summary(&EnrichmentSummary::from_posts(&posts, &enriched));

    println!();
    print!("{}", render_report(&enriched));

    info!(
        "Completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn create_progress_bar(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    match ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars(PROGRESS_BAR_CHARS)),
        Err(e) => warn!("Invalid progress bar template: {}", e),
    }
    pb.set_message("Resolving authors");
    pb
}

fn log_summary(summary: &EnrichmentSummary) {
    if summary.failed() > 0 {
        warn!(
            "Resolved {} of {} missing authors ({} lookups failed)",
            summary.resolved,
            summary.eligible,
            summary.failed()
        );
    } else {
        info!(
            "Resolved {} of {} missing authors across {} posts",
            summary.resolved, summary.eligible, summary.total
        );
    }
}
