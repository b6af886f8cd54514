//! Flat file storage of scraped listings, one csv row per listing
pub mod technologies_list;

use std::io;
use std::path::Path;

use job_scraper::Listing;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use technologies_list::{format_technologies, parse_technologies};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Csv error: '{0}'")]
    Csv(#[from] csv::Error),
    #[error("File error: '{0}'")]
    Io(#[from] io::Error),
    #[error("Malformed technologies list at position {position}: {reason}")]
    MalformedTechnologies {
        position: usize,
        reason: &'static str,
    },
}

/// Column order of the csv file
pub const LISTING_FIELDS: [&str; 6] = [
    "title",
    "company",
    "technologies",
    "location",
    "salary",
    "link",
];

#[derive(Serialize, Deserialize, Debug)]
struct ListingRow {
    title: String,
    company: String,
    technologies: String,
    location: String,
    salary: String,
    link: String,
}

impl From<&Listing> for ListingRow {
    fn from(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            company: listing.company.clone(),
            technologies: format_technologies(&listing.technologies),
            location: listing.location.clone(),
            salary: listing.salary.clone(),
            link: listing.link.clone(),
        }
    }
}

impl TryFrom<ListingRow> for Listing {
    type Error = Error;

    fn try_from(row: ListingRow) -> Result<Self> {
        Ok(Listing {
            technologies: parse_technologies(&row.technologies)?,
            title: row.title,
            company: row.company,
            location: row.location,
            salary: row.salary,
            link: row.link,
        })
    }
}

pub fn write_listings<P: AsRef<Path>>(path: P, listings: &[Listing]) -> Result<()> {
    log::info!("Started writing to CSV file {}", path.as_ref().display());
    let file = std::fs::File::create(path)?;
    write_to(file, listings)
}

/// Header row first, even when there are no listings
pub fn write_to<W: io::Write>(writer: W, listings: &[Listing]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(LISTING_FIELDS)?;
    for listing in listings {
        writer.serialize(ListingRow::from(listing))?;
    }
    writer.flush()?;
    log::info!("Wrote {} vacancies", listings.len());
    Ok(())
}

pub fn read_listings<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>> {
    log::info!("Reading vacancies from {}", path.as_ref().display());
    let file = std::fs::File::open(path)?;
    read_from(file)
}

/// Rows that can't be decoded are logged and skipped
pub fn read_from<R: io::Read>(reader: R) -> Result<Vec<Listing>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut listings = Vec::new();
    for (index, row) in reader.deserialize::<ListingRow>().enumerate() {
        match row.map_err(Error::from).and_then(Listing::try_from) {
            Ok(listing) => listings.push(listing),
            Err(e) => log::error!("Error parsing vacancy row {}: {}", index + 1, e),
        }
    }
    log::info!("Loaded {} vacancies", listings.len());
    Ok(listings)
}
