//! Checkout Core
//!
//! Platform-agnostic logic for the storefront checkout: locale resolution,
//! message bundles, API language codes, view selection and line-item
//! presentation. Nothing here depends on the browser.

pub mod config;
pub mod language_code;
pub mod lines;
pub mod locale;
pub mod messages;
pub mod query;
pub mod view;
pub mod watch;

pub use config::{AppEnv, ConfigError};
pub use language_code::{LanguageCode, api_locale, language_code, with_language_code};
pub use lines::{
    AttributeValue, CheckoutLine, CheckoutVariant, Image, Line, LineKind, Media, MediaType, Money,
    OrderLine, OrderVariant, Product, SelectedAttribute, SummaryLineProps, TaxedMoney,
    Translation, line_attributes_text, summary_line_props, thumbnail_from_checkout_line,
};
pub use locale::{
    CountryCode, DEFAULT_COUNTRY, DEFAULT_LOCALE, LOCALES, Locale, LocaleData, parse_locale_data,
};
pub use messages::{
    MessageBundle, MessageLookup, MessageStore, MessageStoreError, MissingMessages, Translator,
};
pub use query::QueryParams;
pub use view::{RootView, select_view};
pub use watch::{LocaleState, LocaleWatcher, SubscriptionId};
