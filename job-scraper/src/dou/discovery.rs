use std::collections::HashSet;

use lazy_static::lazy_static;
use scraper::{Html, Selector};
use url::Url;

use crate::api::{Error, Result};
use crate::browser::Session;
use crate::types::ControlState;

/// Class of the control that appends the next batch of vacancies
pub const MORE_CONTROL: &str = "more-btn";

lazy_static! {
    static ref ENTRY: Selector = Selector::parse(".l-vacancy").unwrap();
    static ref ENTRY_LINK: Selector = Selector::parse(".vt").unwrap();
}

/// Load the category index, expand it until the more control is exhausted
/// and return the detail page link of every vacancy entry on it.
/// Fails only when the index page itself can't be loaded or read.
pub async fn discover_links<S: Session>(session: &mut S, category_url: &str) -> Result<Vec<String>> {
    session.goto(category_url).await?;

    let mut clicks = 0;
    loop {
        log::info!("Clicking 'More' button");
        match session.press(MORE_CONTROL).await {
            ControlState::Available => clicks += 1,
            ControlState::Exhausted => {
                log::info!("'More' button is not displayed, expanded {} times", clicks);
                break;
            }
        }
    }

    let html = session.source().await?;
    let page_url = session.current_url().await?;
    let links = collect_links(&html, &page_url)?;
    log::info!("Discovered {} vacancy links", links.len());
    Ok(links)
}

/// Links of all vacancy entries in page order, resolved against `page_url` and deduplicated
pub(crate) fn collect_links(html: &str, page_url: &str) -> Result<Vec<String>> {
    let base =
        Url::parse(page_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", page_url, e)))?;
    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();
    let links = doc
        .select(&ENTRY)
        .filter_map(|entry| {
            let href = entry
                .select(&ENTRY_LINK)
                .next()
                .and_then(|anchor| anchor.value().attr("href"));
            let Some(href) = href else {
                log::warn!("Vacancy entry without a link on {}", page_url);
                return None;
            };
            match base.join(href) {
                Ok(link) => Some(link.to_string()),
                Err(e) => {
                    log::warn!("Skipping unparsable vacancy link '{}': {}", href, e);
                    None
                }
            }
        })
        .filter(|link| seen.insert(link.clone()))
        .collect();
    Ok(links)
}
