//! Locale registry and the query-string locale resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display locales the storefront ships message bundles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    /// Test locale used to spot untranslated strings; it has no region.
    #[serde(rename = "minion")]
    Minion,
}

pub const DEFAULT_LOCALE: Locale = Locale::EnUs;

pub const DEFAULT_COUNTRY: CountryCode = CountryCode(*b"US");

pub const LOCALES: &[Locale] = &[Locale::EnUs, Locale::Minion];

impl Locale {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::Minion => "minion",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EnUs => "English (US)",
            Self::Minion => "Minionese",
        }
    }

    /// Region encoded in the tag, if the tag carries one.
    #[must_use]
    pub const fn region(self) -> Option<CountryCode> {
        match self {
            Self::EnUs => Some(CountryCode(*b"US")),
            Self::Minion => None,
        }
    }

    /// Country paired with this locale for region-specific formatting.
    #[must_use]
    pub const fn country_code(self) -> CountryCode {
        match self.region() {
            Some(code) => code,
            None => DEFAULT_COUNTRY,
        }
    }

    /// Whether the commerce API understands this locale.
    #[must_use]
    pub const fn is_api_supported(self) -> bool {
        !matches!(self, Self::Minion)
    }

    /// Match a raw tag against the registry.
    ///
    /// Comparison ignores ASCII case and treats `_` as `-`.
    #[must_use]
    pub fn from_tag(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        LOCALES.iter().copied().find(|locale| {
            let tag = locale.tag();
            tag.len() == trimmed.len()
                && tag
                    .bytes()
                    .zip(trimmed.bytes())
                    .all(|(expected, got)| normalize(expected) == normalize(got))
        })
    }
}

const fn normalize(byte: u8) -> u8 {
    if byte == b'_' {
        b'-'
    } else {
        byte.to_ascii_lowercase()
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale tag: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Two-letter ISO 3166-1 alpha-2 country code, stored upper-case.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode([u8; 2]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid country code: {0:?}")]
pub struct InvalidCountryCode(pub String);

impl CountryCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Constructors only admit ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("US")
    }
}

impl FromStr for CountryCode {
    type Err = InvalidCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(InvalidCountryCode(s.to_string())),
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl Serialize for CountryCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Locale paired with the country used for region-specific formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleData {
    pub locale: Locale,
    pub country_code: CountryCode,
}

impl LocaleData {
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            country_code: locale.country_code(),
        }
    }
}

impl Default for LocaleData {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}

/// Resolve the raw `locale` query value into a locale and country pair.
///
/// Missing or unrecognised values resolve to [`DEFAULT_LOCALE`] and
/// [`DEFAULT_COUNTRY`].
#[must_use]
pub fn parse_locale_data(raw: Option<&str>) -> LocaleData {
    raw.and_then(Locale::from_tag)
        .map_or_else(LocaleData::default, LocaleData::for_locale)
}
