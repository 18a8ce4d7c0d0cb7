//! Supported message locales
//!
//! Every catalog in the crate (templates, placeholders, error messages,
//! fallback messages) is keyed by [`Locale`]. Japanese is the default and
//! the fallback for any tag we don't recognize.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Language a message catalog is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
    Vi,
}

impl Locale {
    /// All supported locales, in switcher order
    pub const ALL: [Locale; 3] = [Locale::Ja, Locale::En, Locale::Vi];

    /// Parse a language tag by its primary subtag
    ///
    /// Accepts bare codes (`en`), BCP 47 tags (`en-US`) and POSIX locale
    /// strings (`en_US.UTF-8`). Matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default();

        match primary.to_ascii_lowercase().as_str() {
            "ja" => Some(Locale::Ja),
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }

    /// Parse a language tag, falling back to the default locale
    pub fn resolve(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::debug!("Unknown locale tag {:?}, falling back to ja", tag);
            Locale::default()
        })
    }

    /// Locale named by the environment
    ///
    /// `LC_ALL` takes precedence over `LANG`; the first non-empty one decides.
    pub fn from_env() -> Option<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`
    pub fn from_env_with<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        ["LC_ALL", "LANG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::from_tag(&value))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Name of the language in that language
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Ja => "日本語",
            Locale::En => "English",
            Locale::Vi => "Tiếng Việt",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Locale::Ja => "🇯🇵",
            Locale::En => "🇺🇸",
            Locale::Vi => "🇻🇳",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// Unknown tags in config files resolve to the default instead of failing the
// whole file.
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Locale::resolve(&tag))
    }
}

#[cfg(test)]
#[path = "locale_tests.rs"]
mod locale_tests;
