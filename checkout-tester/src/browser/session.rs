use std::time::Duration;
use thirtyfour::Capabilities;
use thirtyfour::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl BrowserKind {
    /// Local driver endpoint used when no hub is configured.
    #[must_use]
    pub const fn default_driver_url(self) -> &'static str {
        match self {
            Self::Chrome => "http://localhost:9515",
            Self::Edge => "http://localhost:17556",
            Self::Firefox => "http://localhost:4444",
            Self::Safari => "http://localhost:4445",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chrome" => Some(Self::Chrome),
            "edge" => Some(Self::Edge),
            "firefox" => Some(Self::Firefox),
            "safari" => Some(Self::Safari),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{self:?}").to_lowercase()
    }
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub implicit_wait_secs: u64,
    pub remote_hub: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            implicit_wait_secs: 3,
            remote_hub: None,
        }
    }
}

impl BrowserConfig {
    fn driver_url(&self, kind: BrowserKind) -> &str {
        self.remote_hub
            .as_deref()
            .unwrap_or_else(|| kind.default_driver_url())
    }
}

fn capabilities(kind: BrowserKind, headless: bool) -> WebDriverResult<Capabilities> {
    let caps: Capabilities = match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if headless {
                caps.set_headless()?;
            }
            caps.into()
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            if headless {
                caps.set_headless()?;
            }
            caps.into()
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if headless {
                caps.set_headless()?;
            }
            caps.into()
        }
        // safaridriver has no headless mode
        BrowserKind::Safari => DesiredCapabilities::safari().into(),
    };
    Ok(caps)
}

pub async fn new_session(kind: BrowserKind, cfg: &BrowserConfig) -> WebDriverResult<WebDriver> {
    let caps = capabilities(kind, cfg.headless)?;
    let driver = WebDriver::new(cfg.driver_url(kind), caps).await?;
    driver
        .set_implicit_wait_timeout(Duration::from_secs(cfg.implicit_wait_secs))
        .await?;
    Ok(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_names_parse_case_insensitively() {
        assert_eq!(BrowserKind::from_name("Chrome"), Some(BrowserKind::Chrome));
        assert_eq!(BrowserKind::from_name(" firefox "), Some(BrowserKind::Firefox));
        assert_eq!(BrowserKind::from_name("opera"), None);
        assert_eq!(BrowserKind::Edge.label(), "edge");
    }

    #[test]
    fn hub_overrides_local_driver_url() {
        let mut cfg = BrowserConfig::default();
        assert_eq!(cfg.driver_url(BrowserKind::Safari), "http://localhost:4445");
        cfg.remote_hub = Some("http://grid:4444/wd/hub".into());
        assert_eq!(cfg.driver_url(BrowserKind::Chrome), "http://grid:4444/wd/hub");
    }
}
