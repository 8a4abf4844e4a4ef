//! Static message store keyed by locale, plus message rendering.

use crate::locale::{DEFAULT_LOCALE, LOCALES, Locale};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

const BUNDLE_SOURCES: &[(Locale, &str)] = &[
    (Locale::EnUs, include_str!("../i18n/en-US.json")),
    (Locale::Minion, include_str!("../i18n/minion.json")),
];

#[derive(Debug, Error)]
pub enum MessageStoreError {
    #[error("message bundle for {locale} is not valid JSON: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("message bundle for {0} must be a JSON object")]
    NotAnObject(Locale),
}

/// Diagnostic reported when a locale has no bundle and the default is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing messages for locale: {locale}")]
pub struct MissingMessages {
    pub locale: Locale,
}

/// Nested key → template mapping for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBundle {
    locale: Locale,
    messages: Value,
}

impl MessageBundle {
    /// # Errors
    ///
    /// Returns an error if `json` is not a JSON object.
    pub fn from_json(locale: Locale, json: &str) -> Result<Self, MessageStoreError> {
        let messages: Value = serde_json::from_str(json)
            .map_err(|source| MessageStoreError::Parse { locale, source })?;
        if !messages.is_object() {
            return Err(MessageStoreError::NotAnObject(locale));
        }
        Ok(Self { locale, messages })
    }

    #[must_use]
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            messages: Value::Object(serde_json::Map::new()),
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw entry for a dotted key such as `summary.items`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.messages, |current, part| current.get(part))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Render `key` with `{name}` placeholders replaced from `args`.
    ///
    /// Plural objects pick their branch from the `count` argument.
    #[must_use]
    pub fn render(&self, key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
        self.get(key).and_then(|value| render_value(value, args))
    }

    /// Every leaf key in dotted form.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        collect_keys("", &self.messages, &mut out);
        out
    }
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() && !is_plural(v) {
                collect_keys(&next, v, out);
            } else {
                out.insert(next);
            }
        }
    }
}

fn is_plural(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key("other") || map.contains_key("_"))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let by_count = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .and_then(|count| {
                    let category = plural_category(count);
                    map.get(category)
                        .or_else(|| (category == "zero").then(|| map.get("other")).flatten())
                        .and_then(Value::as_str)
                });
            by_count
                .or_else(|| map.get("_").and_then(Value::as_str))
                .or_else(|| map.get("other").and_then(Value::as_str))?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Result of looking up a locale's bundle.
#[derive(Debug, Clone)]
pub struct MessageLookup {
    pub messages: Arc<MessageBundle>,
    pub diagnostic: Option<MissingMessages>,
}

/// Locale → bundle mapping. The process-wide instance is built once and never mutated.
#[derive(Debug, Clone)]
pub struct MessageStore {
    default: Arc<MessageBundle>,
    bundles: BTreeMap<Locale, Arc<MessageBundle>>,
}

impl MessageStore {
    /// Store holding only the default bundle.
    #[must_use]
    pub fn new(default: MessageBundle) -> Self {
        let default = Arc::new(default);
        let mut bundles = BTreeMap::new();
        bundles.insert(default.locale(), Arc::clone(&default));
        Self { default, bundles }
    }

    #[must_use]
    pub fn with_bundle(mut self, bundle: MessageBundle) -> Self {
        self.bundles.insert(bundle.locale(), Arc::new(bundle));
        self
    }

    /// Parse the bundles compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded bundle fails to parse.
    pub fn builtin() -> Result<Self, MessageStoreError> {
        let mut store: Option<Self> = None;
        let mut extra = Vec::new();
        for (locale, source) in BUNDLE_SOURCES {
            let bundle = MessageBundle::from_json(*locale, source)?;
            if *locale == DEFAULT_LOCALE {
                store = Some(Self::new(bundle));
            } else {
                extra.push(bundle);
            }
        }
        let store = store.unwrap_or_else(|| Self::new(MessageBundle::empty(DEFAULT_LOCALE)));
        Ok(extra.into_iter().fold(store, Self::with_bundle))
    }

    /// Process-wide store of the embedded bundles.
    ///
    /// A bundle that fails to parse is logged and replaced by an empty default store.
    #[must_use]
    pub fn global() -> &'static Self {
        static STORE: OnceLock<MessageStore> = OnceLock::new();
        STORE.get_or_init(|| {
            Self::builtin().unwrap_or_else(|err| {
                log::error!("failed to load message bundles: {err}");
                Self::new(MessageBundle::empty(DEFAULT_LOCALE))
            })
        })
    }

    #[must_use]
    pub fn contains(&self, locale: Locale) -> bool {
        self.bundles.contains_key(&locale)
    }

    #[must_use]
    pub const fn default_bundle(&self) -> &Arc<MessageBundle> {
        &self.default
    }

    /// Bundle for `locale`, or the default bundle plus a diagnostic when absent.
    #[must_use]
    pub fn lookup(&self, locale: Locale) -> MessageLookup {
        self.bundles.get(&locale).map_or_else(
            || MessageLookup {
                messages: Arc::clone(&self.default),
                diagnostic: Some(MissingMessages { locale }),
            },
            |bundle| MessageLookup {
                messages: Arc::clone(bundle),
                diagnostic: None,
            },
        )
    }

    /// Locales from the registry that have a bundle here.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        LOCALES.iter().copied().filter(|l| self.contains(*l))
    }
}

/// Active bundle with the default bundle behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    messages: Arc<MessageBundle>,
    fallback: Arc<MessageBundle>,
}

impl Translator {
    #[must_use]
    pub const fn new(messages: Arc<MessageBundle>, fallback: Arc<MessageBundle>) -> Self {
        Self { messages, fallback }
    }

    #[must_use]
    pub fn for_locale(store: &MessageStore, locale: Locale) -> Self {
        let lookup = store.lookup(locale);
        Self::new(lookup.messages, Arc::clone(store.default_bundle()))
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.messages.locale()
    }

    /// Translate `key`; unknown keys render as the key itself.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.tr(key, None)
    }

    #[must_use]
    pub fn tr(&self, key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
        self.messages
            .render(key, args)
            .or_else(|| self.fallback.render(key, args))
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bundles_parse() {
        let store = MessageStore::builtin().expect("bundles parse");
        assert!(store.contains(Locale::EnUs));
        assert!(store.contains(Locale::Minion));
        assert_eq!(store.locales().count(), LOCALES.len());
    }

    #[test]
    fn every_bundle_key_exists_in_default() {
        let store = MessageStore::builtin().expect("bundles parse");
        let default_keys = store.default_bundle().keys();
        for locale in LOCALES {
            let lookup = store.lookup(*locale);
            for key in lookup.messages.keys() {
                assert!(default_keys.contains(&key), "{locale} has stray key {key}");
            }
        }
    }

    #[test]
    fn missing_locale_falls_back_with_one_diagnostic() {
        let store = MessageStore::new(MessageBundle::empty(Locale::EnUs));
        let lookup = store.lookup(Locale::Minion);
        assert_eq!(lookup.messages.locale(), Locale::EnUs);
        assert_eq!(
            lookup.diagnostic,
            Some(MissingMessages {
                locale: Locale::Minion
            })
        );
        assert!(store.lookup(Locale::EnUs).diagnostic.is_none());
    }

    #[test]
    fn plural_selection_and_interpolation() {
        let bundle = MessageBundle::from_json(
            Locale::EnUs,
            r#"{"items":{"one":"{count} item","other":"{count} items"},"hi":"Hello, {name}!"}"#,
        )
        .expect("bundle");
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(bundle.render("items", Some(&args)).as_deref(), Some("1 item"));
        args.insert("count", "0");
        assert_eq!(bundle.render("items", Some(&args)).as_deref(), Some("0 items"));
        let mut names = BTreeMap::new();
        names.insert("name", "Ada");
        assert_eq!(bundle.render("hi", Some(&names)).as_deref(), Some("Hello, Ada!"));
    }

    #[test]
    fn translator_uses_default_bundle_for_untranslated_keys() {
        let store = MessageStore::builtin().expect("bundles parse");
        let minion = Translator::for_locale(&store, Locale::Minion);
        assert_eq!(minion.t("checkout.title"), "Chekka-oot");
        assert_eq!(minion.t("summary.subtotal"), "Subtotal");
        assert_eq!(minion.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn non_object_bundle_is_rejected() {
        assert!(matches!(
            MessageBundle::from_json(Locale::EnUs, "[1,2]"),
            Err(MessageStoreError::NotAnObject(Locale::EnUs))
        ));
        assert!(matches!(
            MessageBundle::from_json(Locale::EnUs, "{"),
            Err(MessageStoreError::Parse { .. })
        ));
    }
}
