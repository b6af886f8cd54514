use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to navigate to '{url}': {reason}")]
    Navigation { url: String, reason: String },
    #[error("Content not found in html: '{0}'")]
    ElementNotFound(&'static str),
    #[error("Browser session error: '{0}'")]
    Session(String),
    #[error("Invalid url: '{0}'")]
    InvalidUrl(String),
    #[error("WebDriver error: '{0}'")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}
