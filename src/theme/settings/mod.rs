use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod parse_settings;

pub use parse_settings::parse_settings;

/// Settings are read once per process.
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Path to a `settings.conf` file.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %path.display(), "[Config] loaded settings");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "[Config] failed to read settings file");
        }
    }
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - The file is read on first call only; later calls return the cached value.
#[must_use]
pub fn settings() -> Settings {
    SETTINGS
        .get_or_init(|| {
            resolve_settings_config_path().map_or_else(
                || {
                    debug!("[Config] no settings.conf found, using defaults");
                    Settings::default()
                },
                |p| load_settings_from(&p),
            )
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;

    #[test]
    /// What: Parse a realistic settings file with comments, aliases and bad values.
    ///
    /// Inputs:
    /// - Temp `settings.conf` written with `tempfile`.
    ///
    /// Output:
    /// - Known keys applied; invalid numbers leave defaults untouched.
    fn settings_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.conf");
        fs::write(
            &path,
            "# newsq settings\n\
             api_authority = localhost:8080\n\
             api-scheme = http\n\
             api_key = a2V5 # base64 of 'key'\n\
             fetch_delay_ms = 0\n\
             connect_timeout_secs = zero\n\
             read_timeout = 30\n\
             start_screen = Search\n\
             unknown_key = whatever\n",
        )
        .expect("write settings");

        let s = load_settings_from(&path);
        assert_eq!(s.api_authority, "localhost:8080");
        assert_eq!(s.api_scheme, "http");
        assert_eq!(s.api_key.as_deref(), Some("a2V5"));
        assert_eq!(s.fetch_delay_ms, 0);
        assert_eq!(s.connect_timeout_secs, 10);
        assert_eq!(s.read_timeout_secs, 30);
        assert_eq!(s.start_screen, Screen::Search);
        assert_eq!(s.locale, "en-US");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let s = load_settings_from(&dir.path().join("absent.conf"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let mut s = Settings::default();
        parse_settings("connect_timeout_secs = 0\nread_timeout_secs = 0\n", &mut s);
        assert_eq!(s.connect_timeout_secs, 10);
        assert_eq!(s.read_timeout_secs, 15);
    }
}
