//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in a single map.
///
/// Output:
/// - `Some(String)` when the key exists, `None` otherwise.
#[must_use]
pub fn translate(key: &str, translations: &TranslationMap) -> Option<String> {
    translations.get(key).cloned()
}

/// What: Look up a translation, falling back to the built-in English map.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: User override map (may be empty)
/// - `fallback_translations`: Built-in English map
///
/// Output:
/// - Translated string, or the key itself when neither map has it.
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    if let Some(translation) = translations.get(key) {
        return translation.clone();
    }
    if let Some(translation) = fallback_translations.get(key) {
        return translation.clone();
    }
    tracing::debug!(key, "missing translation key");
    key.to_string()
}

/// What: Replace the first `{}` placeholder in `template` with `arg`.
///
/// Details:
/// - Templates without a placeholder get the argument appended after a space.
#[must_use]
pub fn format1(template: &str, arg: &str) -> String {
    template.find("{}").map_or_else(
        || format!("{template} {arg}"),
        |pos| format!("{}{arg}{}", &template[..pos], &template[pos + 2..]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_then_english_then_key() {
        let mut primary = HashMap::new();
        primary.insert("app.tabs.search".to_string(), "Suche".to_string());

        let mut fallback = HashMap::new();
        fallback.insert("app.tabs.search".to_string(), "Search".to_string());
        fallback.insert("app.tabs.world".to_string(), "World".to_string());

        assert_eq!(
            translate_with_fallback("app.tabs.search", &primary, &fallback),
            "Suche"
        );
        assert_eq!(
            translate_with_fallback("app.tabs.world", &primary, &fallback),
            "World"
        );
        assert_eq!(
            translate_with_fallback("app.tabs.missing", &primary, &fallback),
            "app.tabs.missing"
        );
        assert_eq!(translate("app.tabs.world", &primary), None);
    }

    #[test]
    fn format1_fills_first_placeholder() {
        assert_eq!(format1("Opening {}", "https://x"), "Opening https://x");
        assert_eq!(format1("{} {}", "a"), "a {}");
        assert_eq!(format1("No slot", "x"), "No slot x");
    }
}
