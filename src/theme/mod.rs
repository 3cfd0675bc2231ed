//! Theme palette, configuration paths and user settings for newsq.
//!
//! Split into submodules; public re-exports keep the `crate::theme::*` API stable.

/// Path resolution for config directories.
mod paths;
/// Settings access and parsing.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, locales_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use types::{Settings, Theme};

/// What: Palette used by all rendering code.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers lock the mutex around `HOME`/env changes so parallel tests do not race.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
