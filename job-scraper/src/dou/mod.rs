//! jobs.dou.ua: the only site scraped, one vacancy category per run
pub mod discovery;
pub mod extractor;

use crate::api::Result;
use crate::browser::{Session, SessionFactory};
use crate::fetch::{fetch_all, FetchConfig};
use crate::types::Listing;

pub const BASE_URL: &str = "https://jobs.dou.ua/";
pub const DEFAULT_CATEGORY: &str = "Python";

pub fn category_url(category: &str) -> String {
    format!(
        "{}vacancies/?category={}",
        BASE_URL,
        urlencoding::encode(category)
    )
}

/// Discover every vacancy of `category` with one session, then fetch the details concurrently.
/// An error means discovery itself failed, individual vacancies never fail the run.
pub async fn scrape_category<F: SessionFactory>(
    factory: &F,
    category: &str,
    config: &FetchConfig,
) -> Result<Vec<Listing>> {
    let url = category_url(category);
    log::info!("Discovering {} vacancies at {}", category, url);
    let mut session = factory.open().await?;
    let links = discovery::discover_links(&mut session, &url).await;
    if let Err(e) = session.close().await {
        log::warn!("Failed to close discovery session: {}", e);
    }
    let links = links?;
    let listings = fetch_all(factory, links, config).await;
    log::info!("Ended parsing {} vacancies", category);
    Ok(listings)
}
