use std::path::Path;

use job_analyzer::{count_by_category, count_technologies, render_chart, top_technologies};

use crate::{AnalyzeArgs, Error};

pub fn analyze(csv: &Path, category: &str, args: &AnalyzeArgs) -> Result<(), Error> {
    log::info!("Starting data analysis...");
    let listings = persistence::read_listings(csv)?;
    let counts = count_technologies(&listings);
    for (group, mentions) in count_by_category(&counts) {
        log::info!("{}: {} mentions", group, mentions);
    }
    let top = top_technologies(&counts, args.top_n);
    match render_chart(&args.chart, &top, args.top_n, category) {
        Ok(()) => Ok(()),
        Err(job_analyzer::Error::NoData) => {
            log::warn!("No technologies data to display");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
