use std::time::Duration;

use futures::{stream, StreamExt};
use rand::Rng;

use crate::api::Result;
use crate::browser::{Session, SessionFactory};
use crate::dou::extractor::extract;
use crate::types::Listing;

pub const DEFAULT_CONCURRENCY: usize = 5;

/// Randomized wait before every navigation to a vacancy page
#[derive(Debug, Clone, Copy)]
pub struct Politeness {
    min: Duration,
    max: Duration,
}

impl Politeness {
    pub fn new(min: Duration, max: Duration) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// No waiting at all
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

impl Default for Politeness {
    fn default() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(4))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FetchConfig {
    /// maximum number of vacancy pages loading at the same time
    pub concurrency: usize,
    pub politeness: Politeness,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            politeness: Politeness::default(),
        }
    }
}

/// Load and extract every link, at most `config.concurrency` at a time.
/// Each link gets its own browser session. Failed links are logged and left out,
/// results come back in completion order.
pub async fn fetch_all<F: SessionFactory>(
    factory: &F,
    links: Vec<String>,
    config: &FetchConfig,
) -> Vec<Listing> {
    let concurrency = config.concurrency.max(1);
    let requested = links.len();
    log::info!(
        "fetching {} vacancies with {} concurrent sessions",
        requested,
        concurrency
    );
    let listings = stream::iter(links)
        .map(|link| fetch_listing(factory, link, &config.politeness))
        .buffer_unordered(concurrency)
        .filter_map(|listing| async move { listing })
        .collect::<Vec<_>>()
        .await;
    log::info!(
        "fetched {} of {} vacancies, {} failed",
        listings.len(),
        requested,
        requested - listings.len()
    );
    listings
}

async fn fetch_listing<F: SessionFactory>(
    factory: &F,
    link: String,
    politeness: &Politeness,
) -> Option<Listing> {
    match scrape_in_new_session(factory, &link, politeness).await {
        Ok(listing) => {
            log::info!("Got {} details", listing.title);
            Some(listing)
        }
        Err(e) => {
            log::error!("Failed to get details for {}: {}", link, e);
            None
        }
    }
}

/// The session is closed whether or not the scrape succeeded
async fn scrape_in_new_session<F: SessionFactory>(
    factory: &F,
    link: &str,
    politeness: &Politeness,
) -> Result<Listing> {
    let mut session = factory.open().await?;
    let listing = scrape_listing(&mut session, link, politeness).await;
    if let Err(e) = session.close().await {
        log::warn!("Failed to close browser session used for {}: {}", link, e);
    }
    listing
}

async fn scrape_listing<S: Session>(
    session: &mut S,
    link: &str,
    politeness: &Politeness,
) -> Result<Listing> {
    tokio::time::sleep(politeness.sample()).await;
    session.goto(link).await?;
    let html = session.source().await?;
    let current_url = session.current_url().await?;
    extract(&html, &current_url)
}
