//! Application environment shared by the storefront and the tester.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/graphql/";
pub const DEFAULT_CHANNEL: &str = "default-channel";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api url {url:?} is invalid: {reason}")]
    InvalidApiUrl { url: String, reason: String },
    #[error("api url {0:?} must use http or https")]
    UnsupportedScheme(String),
    #[error("channel must not be empty")]
    EmptyChannel,
}

/// Backend endpoint and channel the storefront talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEnv {
    pub api_url: String,
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Base path when hosted under a sub-directory, e.g. `/checkout`.
    #[serde(default)]
    pub router_base: Option<String>,
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

impl Default for AppEnv {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            channel: default_channel(),
            router_base: None,
        }
    }
}

impl AppEnv {
    /// Values baked in at compile time through `CHECKOUT_API_URL`,
    /// `CHECKOUT_CHANNEL` and `PUBLIC_URL`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("CHECKOUT_API_URL"),
            option_env!("CHECKOUT_CHANNEL"),
            option_env!("PUBLIC_URL"),
        )
    }

    fn from_parts(api_url: Option<&str>, channel: Option<&str>, public_url: Option<&str>) -> Self {
        let non_empty = |v: Option<_>| v.map(str::trim).filter(|v| !v.is_empty());
        Self {
            api_url: non_empty(api_url).unwrap_or(DEFAULT_API_URL).to_string(),
            channel: non_empty(channel).unwrap_or(DEFAULT_CHANNEL).to_string(),
            router_base: non_empty(public_url.map(|b| b.trim_end_matches('/')))
                .map(ToString::to_string),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the API url is not an absolute http(s) url or the
    /// channel is blank.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api_url).map_err(|err| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(self.api_url.clone()));
        }
        if self.channel.trim().is_empty() {
            return Err(ConfigError::EmptyChannel);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let env = AppEnv::default();
        assert_eq!(env.channel, "default-channel");
        assert!(env.validate().is_ok());
    }

    #[test]
    fn blank_parts_use_defaults_and_base_is_trimmed() {
        let env = AppEnv::from_parts(Some("  "), None, Some("/checkout/"));
        assert_eq!(env.api_url, DEFAULT_API_URL);
        assert_eq!(env.channel, DEFAULT_CHANNEL);
        assert_eq!(env.router_base.as_deref(), Some("/checkout"));
        assert_eq!(AppEnv::from_parts(None, None, Some("/")).router_base, None);
    }

    #[test]
    fn rejects_bad_urls_and_channels() {
        let mut env = AppEnv {
            api_url: "not a url".into(),
            ..AppEnv::default()
        };
        assert!(matches!(env.validate(), Err(ConfigError::InvalidApiUrl { .. })));
        env.api_url = "ftp://example.com/graphql/".into();
        assert!(matches!(env.validate(), Err(ConfigError::UnsupportedScheme(_))));
        env.api_url = "https://example.com/graphql/".into();
        env.channel = " ".into();
        assert_eq!(env.validate(), Err(ConfigError::EmptyChannel));
    }

    #[test]
    fn deserializes_with_default_channel() {
        let env: AppEnv =
            serde_json::from_str(r#"{"apiUrl":"https://shop.test/graphql/"}"#).expect("parse");
        assert_eq!(env.channel, DEFAULT_CHANNEL);
        assert!(env.router_base.is_none());
    }
}
