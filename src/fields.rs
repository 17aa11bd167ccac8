//! 論理フィールド単位の翻訳マップ
//!
//! Typed alternative to probing suffixed keys by string concatenation:
//! extract a field's variants once with [`FieldTranslations::from_record`],
//! then query languages directly. The suffix naming convention stays
//! confined to the record boundary (`from_record` / `apply_to`).

use std::collections::HashMap;

use serde_json::Value;

use crate::language::Language;
use crate::resolve::{
    non_blank_str,
    suffixed_key,
};

/// Translations of one logical field, keyed by [`Language`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTranslations {
    /// Language → translated value. Blank values are never stored.
    values: HashMap<Language, String>,
    /// Untagged default value, if the record carried a bare key.
    default_value: Option<String>,
}

impl FieldTranslations {
    /// Extracts the variants of `field_name` from a record.
    ///
    /// Only non-blank string values are taken, for suffixed and untagged
    /// keys alike.
    #[must_use]
    pub fn from_record(record: &Value, field_name: &str) -> Self {
        let mut translations = Self::default();
        for lang in Language::ALL {
            if let Some(value) = non_blank_str(record, &suffixed_key(field_name, lang)) {
                translations.values.insert(lang, value.to_string());
            }
        }
        translations.default_value = non_blank_str(record, field_name).map(str::to_string);
        translations
    }

    /// The best value for `language`, with the same fallback chain as
    /// [`resolve_field`](crate::resolve::resolve_field): exact language,
    /// then the untagged default, then Russian.
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&str> {
        self.values
            .get(&language)
            .or(self.default_value.as_ref())
            .or_else(|| self.values.get(&Language::Ru))
            .map(String::as_str)
    }

    /// The translation for exactly `language`, without fallback.
    #[must_use]
    pub fn exact(&self, language: Language) -> Option<&str> {
        self.values.get(&language).map(String::as_str)
    }

    /// Sets the translation for `language`. A blank value removes it.
    pub fn set(&mut self, language: Language, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&language);
        } else {
            self.values.insert(language, value);
        }
    }

    /// Languages with a translation, in canonical order.
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL.into_iter().filter(|lang| self.values.contains_key(lang)).collect()
    }

    /// Languages still missing a translation, in canonical order.
    ///
    /// The complement of [`languages`](Self::languages); callers use it to
    /// decide which variants an auto-translation pass has to fill in.
    #[must_use]
    pub fn missing_languages(&self) -> Vec<Language> {
        Language::ALL.into_iter().filter(|lang| !self.values.contains_key(lang)).collect()
    }

    /// True when no language variant is present (the untagged default does
    /// not count).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Writes the variants back onto a copy of `record` as suffixed keys.
    ///
    /// Existing suffixed keys of `field_name` are replaced; a non-object
    /// record is replaced by a fresh object. The input is not mutated.
    #[must_use]
    pub fn apply_to(&self, record: &Value, field_name: &str) -> Value {
        let mut map = match record {
            Value::Object(map) => map.clone(),
            _ => serde_json::Map::new(),
        };
        for lang in Language::ALL {
            if let Some(value) = self.values.get(&lang) {
                map.insert(suffixed_key(field_name, lang), Value::String(value.clone()));
            }
        }
        if let Some(default_value) = &self.default_value {
            map.insert(field_name.to_string(), Value::String(default_value.clone()));
        }
        Value::Object(map)
    }
}
