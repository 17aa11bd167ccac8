//! Effective-language resolution for the user preference.
//!
//! Persisting the preference belongs to the caller (a key-value store keyed
//! by [`PREFERENCE_KEY`]); this module only decides which language wins
//! given what the caller has at hand.

use crate::language::Language;

/// Storage key under which consumers persist the language preference.
pub const PREFERENCE_KEY: &str = "language";

/// Resolves the effective language from a stored preference and a detected
/// system/browser language.
///
/// Resolution order, first supported code wins:
/// 1. the stored preference
/// 2. the detected language
/// 3. [`Language::Ru`]
///
/// Invalid codes are skipped, not errors: a stale or garbled stored value
/// must never lock a user out of the UI.
#[must_use]
pub fn resolve_preference(stored: Option<&str>, detected: Option<&str>) -> Language {
    stored
        .and_then(|code| code.parse::<Language>().ok())
        .or_else(|| detected.and_then(|code| code.parse::<Language>().ok()))
        .unwrap_or_default()
}

/// Detects the language of the host locale, if it is a supported one.
#[must_use]
pub fn detect_system_language() -> Option<Language> {
    sys_locale::get_locale().and_then(|locale| locale.parse::<Language>().ok())
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::stored_wins(Some("de"), Some("en"), Language::De)]
    #[case::stored_with_region(Some("pt-PT"), None, Language::Pt)]
    #[case::detected_when_no_stored(None, Some("en-US"), Language::En)]
    #[case::detected_when_stored_invalid(Some("fr"), Some("en"), Language::En)]
    #[case::fallback_when_both_invalid(Some("fr"), Some("xx"), Language::Ru)]
    #[case::fallback_when_both_missing(None, None, Language::Ru)]
    #[case::empty_stored_is_invalid(Some(""), Some("de"), Language::De)]
    fn test_resolve_preference(
        #[case] stored: Option<&str>,
        #[case] detected: Option<&str>,
        #[case] expected: Language,
    ) {
        assert_that!(resolve_preference(stored, detected), eq(expected));
    }

    #[test]
    fn test_detect_system_language_is_supported_when_present() {
        // System dependent; only the closure over the supported set is
        // checked here.
        if let Some(language) = detect_system_language() {
            assert_that!(Language::ALL.contains(&language), eq(true));
        }
    }
}
