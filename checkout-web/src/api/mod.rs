//! Client for the commerce GraphQL endpoint.
//!
//! Every request carries the adapter-derived `languageCode` variable. Fetching
//! goes through the browser `fetch` API; host builds report the transport as
//! unavailable.

mod models;
mod queries;

pub use models::{
    Checkout, CheckoutData, GraphQlError, GraphQlResponse, Order, OrderData, Totals,
};
pub use queries::{CHECKOUT_QUERY, ORDER_QUERY};

use checkout_core::{AppEnv, ConfigError, Locale, with_language_code};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response could not be decoded: {0}")]
    Decode(String),
    #[error("server reported errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
}

/// How cached results are reused. Only carried as configuration; the client
/// itself keeps no cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPolicy {
    #[default]
    CacheAndNetwork,
    NetworkOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    endpoint: Url,
    channel: String,
    policy: RequestPolicy,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the environment fails validation.
    pub fn new(env: &AppEnv) -> Result<Self, ApiError> {
        let endpoint = env.validate()?;
        Ok(Self {
            endpoint,
            channel: env.channel.trim().to_string(),
            policy: RequestPolicy::default(),
        })
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: RequestPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    #[must_use]
    pub const fn policy(&self) -> RequestPolicy {
        self.policy
    }

    /// JSON body for a GraphQL POST, with `languageCode` merged into `variables`.
    #[must_use]
    pub fn request_body(&self, query: &str, variables: Value, locale: Locale) -> Value {
        json!({
            "query": query,
            "variables": with_language_code(variables, locale),
        })
    }

    /// # Errors
    ///
    /// Returns an error when the request cannot be sent, the server answers
    /// with a non-success status, the body cannot be decoded, or the server
    /// reports GraphQL errors.
    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        locale: Locale,
    ) -> Result<T, ApiError> {
        let body = self.request_body(query, variables, locale);
        log::debug!("POST {} ({:?})", self.endpoint, self.policy);

        #[cfg(target_arch = "wasm32")]
        {
            use crate::dom;
            use wasm_bindgen_futures::JsFuture;

            let response = dom::post_json(self.endpoint.as_str(), &body.to_string())
                .await
                .map_err(|err| ApiError::Transport(dom::js_error_message(&err)))?;
            if !response.ok() {
                return Err(ApiError::Status(response.status()));
            }
            let promise = response
                .json()
                .map_err(|err| ApiError::Decode(dom::js_error_message(&err)))?;
            let value = JsFuture::from(promise)
                .await
                .map_err(|err| ApiError::Decode(dom::js_error_message(&err)))?;
            let envelope: GraphQlResponse<T> = serde_wasm_bindgen::from_value(value)
                .map_err(|err| ApiError::Decode(err.to_string()))?;
            envelope.into_result()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = body;
            Err(ApiError::Transport(
                "fetch is only available in the browser".to_string(),
            ))
        }
    }
}
