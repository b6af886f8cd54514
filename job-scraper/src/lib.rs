pub mod api;
pub mod browser;
pub mod dou;
pub mod fetch;
#[cfg(test)]
pub(crate) mod mock;
pub mod technologies;
pub mod types;
pub mod webdriver;

pub use api::{Error, Result};
pub use types::{ControlState, Listing, SALARY_NOT_SPECIFIED};
