//! Suffix-key resolution over localized content records.
//!
//! A record is a flat JSON object in which a logical field `title` may be
//! stored as `title_ru`, `title_en`, ... plus an optional untagged `title`.
//! Resolution probes the requested language first, then the untagged value,
//! then the Russian fallback, and degrades to an empty string rather than
//! failing: a localization miss must never abort rendering.

use serde_json::Value;

use crate::language::Language;

/// Returns the non-blank string stored under `key`, if any.
///
/// Non-string values are treated as absent, for suffixed and untagged keys
/// alike. The records come from a loosely typed API; a number stored under
/// `title_en` is garbage, not a title.
pub(crate) fn non_blank_str<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str).filter(|value| !value.trim().is_empty())
}

/// The concrete storage key for a field in a given language.
#[must_use]
pub fn suffixed_key(field_name: &str, language: Language) -> String {
    format!("{field_name}_{language}")
}

/// Resolves the best available value of `field_name` for `language`.
///
/// Resolution order, first non-blank string wins:
/// 1. `{field_name}_{language}`
/// 2. `{field_name}` (untagged default)
/// 3. `{field_name}_ru` (fallback language)
///
/// Returns `""` when nothing matches or when the record is `null` or not an
/// object. Total: never fails, never mutates the record.
#[must_use]
pub fn resolve_field<'a>(record: &'a Value, field_name: &str, language: Language) -> &'a str {
    if let Some(value) = non_blank_str(record, &suffixed_key(field_name, language)) {
        return value;
    }
    if let Some(value) = non_blank_str(record, field_name) {
        return value;
    }
    if let Some(value) = non_blank_str(record, &suffixed_key(field_name, Language::Ru)) {
        tracing::trace!(field = field_name, language = %language, "falling back to ru");
        return value;
    }
    tracing::trace!(field = field_name, language = %language, "no localized value");
    ""
}

/// Returns true iff `field_name` has a non-blank translation for exactly
/// `language`.
///
/// Unlike [`resolve_field`], neither the untagged key nor the `ru` fallback
/// is considered.
#[must_use]
pub fn has_translation(record: &Value, field_name: &str, language: Language) -> bool {
    non_blank_str(record, &suffixed_key(field_name, language)).is_some()
}

/// The languages `field_name` is translated into, in canonical order.
#[must_use]
pub fn available_languages(record: &Value, field_name: &str) -> Vec<Language> {
    Language::ALL.into_iter().filter(|lang| has_translation(record, field_name, *lang)).collect()
}

/// Localizes a sequence of records for display.
///
/// Each named field of every record is overwritten with its
/// [`resolve_field`] result in a shallow copy; all other keys are preserved.
/// Non-object elements are passed through cloned. The input and its elements
/// are never mutated.
#[must_use]
pub fn localize_records(records: &[Value], fields: &[&str], language: Language) -> Vec<Value> {
    records
        .iter()
        .map(|record| {
            let Value::Object(map) = record else {
                return record.clone();
            };
            let mut localized = map.clone();
            for field in fields {
                let resolved = resolve_field(record, field, language).to_string();
                localized.insert((*field).to_string(), Value::String(resolved));
            }
            Value::Object(localized)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn news_record() -> Value {
        json!({
            "id": 42,
            "title": "Default",
            "title_ru": "Привет",
            "title_en": "Hello",
            "body_ru": "Текст",
            "published_at": "2024-03-05",
        })
    }

    #[rstest]
    #[case::exact_language(Language::En, "Hello")]
    #[case::fallback_language(Language::Ru, "Привет")]
    fn test_resolve_field_prefers_suffixed_key(#[case] language: Language, #[case] expected: &str) {
        assert_that!(resolve_field(&news_record(), "title", language), eq(expected));
    }

    #[test]
    fn test_resolve_field_falls_back_to_untagged_before_ru() {
        // de has no suffixed title, so the untagged value wins over title_ru.
        assert_that!(resolve_field(&news_record(), "title", Language::De), eq("Default"));
    }

    #[test]
    fn test_resolve_field_falls_back_to_ru_last() {
        assert_that!(resolve_field(&news_record(), "body", Language::De), eq("Текст"));
    }

    #[rstest]
    #[case::null_record(json!(null))]
    #[case::array_record(json!(["title_ru"]))]
    #[case::missing_field(json!({"other": "x"}))]
    fn test_resolve_field_returns_empty_on_miss(#[case] record: Value) {
        assert_that!(resolve_field(&record, "title", Language::En), eq(""));
    }

    #[rstest]
    #[case::blank_suffixed(json!({"title_en": "  ", "title_ru": "Привет"}), "Привет")]
    #[case::blank_everywhere(json!({"title": "  "}), "")]
    fn test_blank_values_count_as_absent(#[case] record: Value, #[case] expected: &str) {
        assert_that!(resolve_field(&record, "title", Language::En), eq(expected));
    }

    #[rstest]
    #[case::number_under_suffixed(json!({"title_en": 7, "title_ru": "Привет"}), "Привет")]
    #[case::bool_under_untagged(json!({"title": true}), "")]
    fn test_non_string_values_count_as_absent(#[case] record: Value, #[case] expected: &str) {
        assert_that!(resolve_field(&record, "title", Language::En), eq(expected));
    }

    #[test]
    fn test_has_translation_checks_exact_language_only() {
        let record = news_record();
        assert_that!(has_translation(&record, "title", Language::En), eq(true));
        // Fallbacks exist, but de itself is not translated.
        assert_that!(has_translation(&record, "title", Language::De), eq(false));
        assert_that!(has_translation(&json!(null), "title", Language::Ru), eq(false));
    }

    #[test]
    fn test_available_languages_keeps_canonical_order() {
        // Insertion order en-before-ru must not leak into the result.
        let record = json!({"title_en": "Hello", "title_ru": "Привет"});
        assert_that!(
            available_languages(&record, "title"),
            container_eq(vec![Language::Ru, Language::En])
        );
        assert_that!(available_languages(&json!(null), "title"), is_empty());
    }

    #[test]
    fn test_localize_records_overwrites_named_fields_only() {
        let records = vec![news_record()];
        let localized = localize_records(&records, &["title", "body"], Language::En);

        assert_that!(localized.len(), eq(1));
        let first = localized.first().unwrap();
        assert_that!(first.get("title").and_then(Value::as_str), some(eq("Hello")));
        assert_that!(first.get("body").and_then(Value::as_str), some(eq("Текст")));
        // Untouched keys survive, suffixed originals included.
        assert_that!(first.get("id").and_then(Value::as_i64), some(eq(42)));
        assert_that!(first.get("title_ru").and_then(Value::as_str), some(eq("Привет")));
    }

    #[test]
    fn test_localize_records_does_not_mutate_input() {
        let records = vec![news_record(), json!(null)];
        let snapshot = records.clone();
        let _localized = localize_records(&records, &["title"], Language::De);
        assert_that!(records, eq(&snapshot));
    }
}
