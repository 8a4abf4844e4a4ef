//! Thin page object over the mounted storefront.

use anyhow::{Context, Result, bail};
use std::time::{Duration, Instant};
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use url::Url;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const CHECKOUT_SELECTOR: &str = "main.checkout";
pub const ORDER_CONFIRMATION_SELECTOR: &str = "main.order-confirmation";
pub const NOT_FOUND_SELECTOR: &str = "section.not-found";
pub const LOCALE_SWITCHER_SELECTOR: &str = "select#locale-switcher";

/// Storefront URL with `params` appended to whatever query `base` already carries.
///
/// # Errors
/// Returns an error if `base` is not an absolute URL.
pub fn storefront_url(base: &str, params: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("invalid base url {base:?}"))?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct StorefrontPage<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> StorefrontPage<'a> {
    #[must_use]
    pub fn new(driver: &'a WebDriver, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            base_url: base_url.into(),
        }
    }

    pub async fn open(&self, params: &[(&str, &str)]) -> Result<()> {
        let url = storefront_url(&self.base_url, params)?;
        self.driver
            .goto(url.as_str())
            .await
            .with_context(|| format!("navigating to {url}"))?;
        Ok(())
    }

    /// Wait for the first of `selectors` to appear and return the one that matched.
    pub async fn wait_for_any(&self, selectors: &[&'static str]) -> Result<&'static str> {
        let deadline = Instant::now() + DEFAULT_TIMEOUT;
        loop {
            for selector in selectors {
                if !self.driver.find_all(By::Css(*selector)).await?.is_empty() {
                    return Ok(*selector);
                }
            }
            if Instant::now() >= deadline {
                bail!("none of {selectors:?} appeared within {DEFAULT_TIMEOUT:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn text_of(&self, selector: &str) -> Result<String> {
        let element = self
            .driver
            .find(By::Css(selector))
            .await
            .with_context(|| format!("finding {selector}"))?;
        Ok(element.text().await?)
    }

    /// Poll until the element at `selector` contains `needle`.
    pub async fn wait_for_text(&self, selector: &str, needle: &str) -> Result<String> {
        let deadline = Instant::now() + DEFAULT_TIMEOUT;
        loop {
            if let Ok(text) = self.text_of(selector).await
                && text.contains(needle)
            {
                return Ok(text);
            }
            if Instant::now() >= deadline {
                bail!("{selector} did not show {needle:?} within {DEFAULT_TIMEOUT:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn locale_options(&self) -> Result<Vec<String>> {
        let options = self
            .driver
            .find_all(By::Css(format!("{LOCALE_SWITCHER_SELECTOR} option[value]")))
            .await?;
        let mut values = Vec::with_capacity(options.len());
        for option in options {
            if let Some(value) = option.value().await?
                && !value.is_empty()
            {
                values.push(value);
            }
        }
        Ok(values)
    }

    pub async fn select_locale(&self, tag: &str) -> Result<()> {
        let element = self
            .driver
            .find(By::Css(LOCALE_SWITCHER_SELECTOR))
            .await
            .context("locale switcher not rendered")?;
        SelectElement::new(&element)
            .await?
            .select_by_value(tag)
            .await
            .with_context(|| format!("selecting locale {tag}"))?;
        Ok(())
    }

    pub async fn query_param(&self, key: &str) -> Result<Option<String>> {
        let url = self.driver.current_url().await?;
        Ok(url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_url_appends_params() {
        let url = storefront_url("http://localhost:8080/", &[("orderId", "o 1"), ("locale", "minion")])
            .expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/?orderId=o+1&locale=minion");
    }

    #[test]
    fn storefront_url_keeps_existing_query() {
        let url = storefront_url("http://localhost:8080/checkout/?locale=en-US", &[]).expect("url");
        assert_eq!(url.query(), Some("locale=en-US"));
        assert!(storefront_url("not a url", &[]).is_err());
    }
}
