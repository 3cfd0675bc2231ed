//! Localization for newsq.
//!
//! English strings are embedded from `config/locales/en-US.yml` and flattened
//! into dot-notation keys (`app.tabs.world`). A user override file at
//! `~/.config/newsq/locales/<locale>.yml` is layered on top; keys it lacks
//! fall back to English and then to the key itself.

mod loader;
pub mod translations;

pub use loader::{load_locale_file, parse_locale_yaml};
pub use translations::{TranslationMap, format1, translate, translate_with_fallback};

use std::sync::OnceLock;

/// Embedded English locale file.
pub(crate) const BUILT_IN_EN_US: &str = include_str!("../../config/locales/en-US.yml");

/// Loaded translation maps: (override, english).
static TRANSLATIONS: OnceLock<(TranslationMap, TranslationMap)> = OnceLock::new();

/// What: Load the override and built-in maps once.
fn maps() -> &'static (TranslationMap, TranslationMap) {
    TRANSLATIONS.get_or_init(|| {
        let english = parse_locale_yaml(BUILT_IN_EN_US).unwrap_or_else(|e| {
            tracing::error!(error = %e, "[i18n] built-in locale failed to parse");
            TranslationMap::new()
        });
        let locale = crate::theme::settings().locale;
        let overrides = if locale == "en-US" {
            TranslationMap::new()
        } else {
            match load_locale_file(&locale, &crate::theme::locales_dir()) {
                Ok(map) => {
                    tracing::info!(locale = %locale, keys = map.len(), "[i18n] loaded locale override");
                    map
                }
                Err(e) => {
                    tracing::warn!(locale = %locale, error = %e, "[i18n] using built-in English");
                    TranslationMap::new()
                }
            }
        };
        (overrides, english)
    })
}

/// What: Translate a dot-notation key.
///
/// Output:
/// - Localized string, English fallback, or the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    let (overrides, english) = maps();
    translate_with_fallback(key, overrides, english)
}

/// What: Translate a key and fill its `{}` placeholder with `arg`.
#[must_use]
pub fn t_fmt1(key: &str, arg: impl std::fmt::Display) -> String {
    format1(&t(key), &arg.to_string())
}
