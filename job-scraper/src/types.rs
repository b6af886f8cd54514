use std::collections::BTreeSet;

/// Sentinel stored when a listing does not advertise a salary
pub const SALARY_NOT_SPECIFIED: &str = "Not specified";

/// One scraped job posting.
/// Only ever built by a successful extraction, so every field is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub technologies: BTreeSet<String>,
    pub location: String,
    /// rendered text of the salary element, `<br>` kept as a line break,
    /// or `Not specified`
    pub salary: String,
    /// url of the detail page after redirects
    pub link: String,
}

/// Result of looking up and activating a paging control on the index page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// the control was present, visible and got clicked
    Available,
    /// the control is gone, hidden or refused the click
    Exhausted,
}
