//! Query-string parameters read from the current page URL.

use serde::Serialize;
use std::collections::BTreeMap;
use url::form_urlencoded;

pub const LOCALE_PARAM: &str = "locale";
pub const ORDER_ID_PARAM: &str = "orderId";

/// Untyped view of the page's query string.
///
/// Values are percent-decoded; when a key repeats, the first value wins.
/// Unlike `URLSearchParams`, which keeps the last value, the first occurrence
/// decides both the view and the locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    /// Parse a `location.search` value, with or without the leading `?`.
    #[must_use]
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let mut values = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    /// Parse the query component of a full URL or path such as `/checkout?locale=minion#top`.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
        without_fragment
            .split_once('?')
            .map_or_else(Self::default, |(_, query)| Self::parse(query))
    }

    /// Value for `key`; empty values count as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.get(LOCALE_PARAM)
    }

    #[must_use]
    pub fn order_id(&self) -> Option<&str> {
        self.get(ORDER_ID_PARAM)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy with `locale` replaced, keeping every other parameter.
    #[must_use]
    pub fn with_locale(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.values.insert(LOCALE_PARAM.to_string(), tag.to_string());
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = BTreeMap::new();
        for (key, value) in iter {
            values.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { values }
    }
}
