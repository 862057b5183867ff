//! Browser session - one shared WebDriver connection per suite run

use thirtyfour::prelude::*;
use tracing::{info, warn};

use crate::error::E2eResult;

/// A live browser session bound to the application base URL.
///
/// Acquired once per suite run and reused by every test case; released
/// with [`Session::quit`] at suite end regardless of case outcomes.
pub struct Session {
    driver: WebDriver,
    base_url: String,
}

impl Session {
    /// Open a new browser session against a WebDriver endpoint
    pub async fn connect(webdriver_url: &str, config: SessionConfig) -> E2eResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }
        caps.add_chrome_arg("--disable-blink-features=AutomationControlled")?;

        let driver = WebDriver::new(webdriver_url, caps).await?;
        driver.maximize_window().await?;

        info!("Browser session opened against {}", config.base_url);

        Ok(Self {
            driver,
            base_url: config.base_url,
        })
    }

    /// The underlying WebDriver handle
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// The application base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Navigate to a path relative to the application base URL
    pub async fn goto(&self, path: &str) -> E2eResult<()> {
        self.driver
            .goto(&format!("{}{}", self.base_url, path))
            .await?;
        Ok(())
    }

    /// Close the browser session
    pub async fn quit(self) {
        if let Err(e) = self.driver.quit().await {
            warn!("Failed to close browser session cleanly: {}", e);
        }
    }
}

/// Configuration for opening a browser session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the application under test
    pub base_url: String,

    /// Run the browser headless
    pub headless: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://travner.vercel.app".to_string(),
            headless: true,
        }
    }
}
