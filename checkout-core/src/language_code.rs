//! Conversion from display locales to the commerce API's language-code tokens.

use crate::locale::{DEFAULT_LOCALE, Locale};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const LANGUAGE_CODE_VAR: &str = "languageCode";

/// Upper snake-case token such as `EN_US`, as expected by the API's `LanguageCodeEnum`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Locale to send to the API; locales it cannot handle are replaced by the default.
#[must_use]
pub const fn api_locale(locale: Locale) -> Locale {
    if locale.is_api_supported() {
        locale
    } else {
        DEFAULT_LOCALE
    }
}

/// Language-code token for `locale`.
#[must_use]
pub fn language_code(locale: Locale) -> LanguageCode {
    LanguageCode(upper_snake(api_locale(locale).tag()))
}

fn upper_snake(tag: &str) -> String {
    tag.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Merge the `languageCode` variable into a set of request variables.
///
/// Non-object inputs are replaced by an object holding only the language code.
#[must_use]
pub fn with_language_code(variables: Value, locale: Locale) -> Value {
    let mut map = match variables {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert(
        LANGUAGE_CODE_VAR.to_string(),
        Value::String(language_code(locale).0),
    );
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LOCALES;
    use serde_json::json;

    #[test]
    fn default_locale_maps_to_upper_snake_token() {
        assert_eq!(language_code(Locale::EnUs).as_str(), "EN_US");
    }

    #[test]
    fn unsupported_locale_shares_default_token() {
        assert_eq!(language_code(Locale::Minion), language_code(DEFAULT_LOCALE));
    }

    #[test]
    fn every_locale_has_a_token() {
        for locale in LOCALES {
            let code = language_code(*locale);
            assert!(!code.as_str().is_empty());
            assert!(code.as_str().chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn variables_gain_language_code() {
        let merged = with_language_code(json!({ "checkoutId": "x" }), Locale::Minion);
        assert_eq!(merged, json!({ "checkoutId": "x", "languageCode": "EN_US" }));
        let replaced = with_language_code(Value::Null, Locale::EnUs);
        assert_eq!(replaced, json!({ "languageCode": "EN_US" }));
    }
}
