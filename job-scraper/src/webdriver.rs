use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::api::{Error, Result};
use crate::browser::{Session, SessionFactory};
use crate::types::ControlState;

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Opens a fresh chrome session on a WebDriver server for every call to `open`
pub struct WebDriverFactory {
    server_url: String,
    headless: bool,
}

impl WebDriverFactory {
    pub fn new(server_url: impl Into<String>, headless: bool) -> Self {
        Self {
            server_url: server_url.into(),
            headless,
        }
    }
}

#[async_trait]
impl SessionFactory for WebDriverFactory {
    type Session = WebDriverSession;

    async fn open(&self) -> Result<WebDriverSession> {
        let mut caps = DesiredCapabilities::chrome();
        if self.headless {
            caps.set_headless()
                .map_err(|e| Error::Session(format!("invalid capabilities: {}", e)))?;
        }
        let driver = WebDriver::new(&self.server_url, caps).await.map_err(|e| {
            Error::Session(format!(
                "failed to start session on {}: {}",
                self.server_url, e
            ))
        })?;
        log::debug!("opened webdriver session on {}", self.server_url);
        Ok(WebDriverSession { driver })
    }
}

pub struct WebDriverSession {
    driver: WebDriver,
}

#[async_trait]
impl Session for WebDriverSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        log::debug!("GET {}", url);
        self.driver.goto(url).await.map_err(|e| Error::Navigation {
            url: url.to_owned(),
            reason: e.to_string(),
        })
    }

    async fn source(&mut self) -> Result<String> {
        Ok(self.driver.source().await?)
    }

    async fn current_url(&mut self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn press(&mut self, class_name: &str) -> ControlState {
        let control = match self.driver.find_all(By::ClassName(class_name)).await {
            Ok(found) => found.into_iter().next(),
            Err(e) => {
                log::debug!("lookup of '{}' failed: {}", class_name, e);
                None
            }
        };
        let Some(control) = control else {
            return ControlState::Exhausted;
        };
        match control.is_displayed().await {
            Ok(true) => {}
            Ok(false) => return ControlState::Exhausted,
            Err(e) => {
                log::debug!("visibility check of '{}' failed: {}", class_name, e);
                return ControlState::Exhausted;
            }
        }
        match control.click().await {
            Ok(()) => ControlState::Available,
            Err(e) => {
                log::debug!("'{}' refused the click: {}", class_name, e);
                ControlState::Exhausted
            }
        }
    }

    async fn close(self) -> Result<()> {
        self.driver
            .quit()
            .await
            .map_err(|e| Error::Session(format!("failed to quit session: {}", e)))
    }
}
