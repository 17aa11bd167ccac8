//! Supported languages of the content catalog.

use std::fmt;
use std::str::FromStr;

use chrono::Locale;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Error returned when a language code is outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language code: '{0}'")]
pub struct UnsupportedLanguage(pub String);

/// A language of the content catalog.
///
/// The set is closed: records store their translations under keys suffixed
/// with one of these codes (`title_ru`, `title_en`, ...). [`Language::Ru`]
/// is the system-wide fallback and the default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian (fallback language).
    #[default]
    Ru,
    /// English.
    En,
    /// German.
    De,
    /// Portuguese.
    Pt,
}

impl Language {
    /// All supported languages in canonical order.
    ///
    /// Ordered iterations over the language set always use this constant,
    /// never the key order of a record.
    pub const ALL: [Self; 4] = [Self::Ru, Self::En, Self::De, Self::Pt];

    /// The code used as a key suffix in records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::De => "de",
            Self::Pt => "pt",
        }
    }

    /// The locale used when formatting dates for this language.
    #[must_use]
    pub const fn locale(self) -> Locale {
        match self {
            Self::Ru => Locale::ru_RU,
            Self::En => Locale::en_US,
            Self::De => Locale::de_DE,
            Self::Pt => Locale::pt_PT,
        }
    }

    /// English name of the language, as used in translation prompts.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ru => "Russian",
            Self::En => "English",
            Self::De => "German",
            Self::Pt => "Portuguese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Parses a language code, tolerating a region suffix (`pt-PT`, `ru_RU`)
    /// as produced by browsers and OS locale queries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.split(['-', '_']).next().unwrap_or(s);
        match primary.to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            "pt" => Ok(Self::Pt),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}
