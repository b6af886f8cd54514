use std::path::Path;

use job_scraper::dou::scrape_category;
use job_scraper::fetch::{FetchConfig, Politeness};
use job_scraper::webdriver::WebDriverFactory;

use crate::{Error, ScrapeArgs};

/// Scrape the category into `csv`. An existing file is kept unless `--force` is set.
/// When discovery fails nothing is written, so the next run starts over.
pub async fn scrape(csv: &Path, category: &str, args: &ScrapeArgs) -> Result<(), Error> {
    if csv.exists() && !args.force {
        log::info!(
            "CSV file {} with data already exists, skipping vacancy parsing",
            csv.display()
        );
        return Ok(());
    }
    log::info!("Starting vacancy parsing...");
    let factory = WebDriverFactory::new(args.webdriver_url.as_str(), !args.headed);
    let config = FetchConfig {
        concurrency: args.concurrency,
        politeness: Politeness::default(),
    };
    let listings = scrape_category(&factory, category, &config).await?;
    persistence::write_listings(csv, &listings)?;
    log::info!("Finished writing to CSV file");
    Ok(())
}
