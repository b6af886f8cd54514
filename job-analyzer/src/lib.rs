//! Technology statistics over scraped listings
pub mod chart;

use std::collections::HashMap;

use job_scraper::technologies::category_of;
use job_scraper::Listing;
use thiserror::Error;

pub use chart::render_chart;

pub const DEFAULT_TOP_N: usize = 15;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Chart rendering failed: '{0}'")]
    Chart(String),
    #[error("No technologies data to display")]
    NoData,
}

/// Number of listings mentioning each technology
pub fn count_technologies(listings: &[Listing]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for technology in listings.iter().flat_map(|listing| listing.technologies.iter()) {
        *counts.entry(technology.clone()).or_insert(0) += 1;
    }
    log::info!("Found {} unique technologies", counts.len());
    counts
}

/// Mentions summed per vocabulary category, largest first.
/// Technologies outside the vocabulary are grouped under "Other".
pub fn count_by_category(counts: &HashMap<String, usize>) -> Vec<(&'static str, usize)> {
    let mut categories: HashMap<&'static str, usize> = HashMap::new();
    for (technology, count) in counts {
        let category = category_of(technology).unwrap_or("Other");
        *categories.entry(category).or_insert(0) += count;
    }
    let mut categories = categories.into_iter().collect::<Vec<_>>();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    categories
}

/// The `n` most mentioned technologies, ties broken by name
pub fn top_technologies(counts: &HashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut ranked = counts
        .iter()
        .map(|(technology, count)| (technology.clone(), *count))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
