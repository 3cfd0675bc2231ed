//! Locale file loading and parsing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::translations::TranslationMap;

/// What: Load a locale override file and parse it into a `TranslationMap`.
///
/// Inputs:
/// - `locale`: Locale code (e.g., "de-DE")
/// - `locales_dir`: Directory holding `<locale>.yml` files
///
/// Output:
/// - `Result<TranslationMap, String>` containing translations or a readable error
///
/// # Errors
/// - Returns `Err` for an empty or malformed locale code
/// - Returns `Err` when the file is missing, unreadable, empty or not valid YAML
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<TranslationMap, String> {
    if !is_valid_locale_format(locale) {
        return Err(format!(
            "Invalid locale code format: '{locale}'. Expected language[-region] (e.g., 'en-US')"
        ));
    }

    let file_path = locales_dir.join(format!("{locale}.yml"));
    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;
    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents)
        .map_err(|e| format!("Failed to parse locale file {}: {e}", file_path.display()))
}

/// What: Validate a locale code such as `en-US`.
fn is_valid_locale_format(locale: &str) -> bool {
    if locale.is_empty() || locale.len() > 20 {
        return false;
    }
    locale.chars().all(|c| c.is_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

/// What: Parse locale YAML into a flat `TranslationMap`.
///
/// Details:
/// - Expects a single top-level key naming the locale (e.g., `en-US:`),
///   which is dropped from the flattened keys.
///
/// # Errors
/// - Returns `Err` when the content is not valid YAML.
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = HashMap::new();
    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten YAML into dot-notation keys.
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Nested YAML flattens into dot keys without the locale prefix.
    fn nested_yaml_is_flattened() {
        let yaml = "de-DE:\n  app:\n    tabs:\n      world: \"Welt\"\n    size: 30\n";
        let map = parse_locale_yaml(yaml).expect("valid yaml");
        assert_eq!(map.get("app.tabs.world").map(String::as_str), Some("Welt"));
        assert_eq!(map.get("app.size").map(String::as_str), Some("30"));
    }

    #[test]
    /// What: Override files load from a directory; bad codes and missing files are errors.
    ///
    /// Inputs:
    /// - Temp locales directory with one `de-DE.yml`.
    ///
    /// Output:
    /// - `de-DE` loads; `fr-FR` and `../x` fail.
    fn locale_files_load_from_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(
            dir.path().join("de-DE.yml"),
            "de-DE:\n  app:\n    messages:\n      no_results: \"Keine Ergebnisse.\"\n",
        )
        .expect("write locale");

        let map = load_locale_file("de-DE", dir.path()).expect("load de-DE");
        assert_eq!(
            map.get("app.messages.no_results").map(String::as_str),
            Some("Keine Ergebnisse.")
        );
        assert!(load_locale_file("fr-FR", dir.path()).is_err());
        assert!(load_locale_file("../x", dir.path()).is_err());
        assert!(load_locale_file("", dir.path()).is_err());
    }

    #[test]
    fn built_in_english_parses() {
        let map = parse_locale_yaml(crate::i18n::BUILT_IN_EN_US).expect("embedded locale");
        assert_eq!(
            map.get("app.messages.no_results").map(String::as_str),
            Some("No results found.")
        );
        assert_eq!(map.get("app.tabs.world").map(String::as_str), Some("World"));
    }
}
