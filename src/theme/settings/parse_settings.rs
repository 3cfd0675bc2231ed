use crate::state::Screen;
use crate::theme::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys are ignored; values that fail to parse keep the current value.
/// - Several keys accept an alias so older files keep working.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_scheme" | "scheme" => {
                if !val.is_empty() {
                    settings.api_scheme = val;
                }
            }
            "api_authority" | "api_host" | "authority" => {
                if !val.is_empty() {
                    settings.api_authority = val;
                }
            }
            "api_key" | "guardian_api_key" => {
                settings.api_key = if val.is_empty() { None } else { Some(val) };
            }
            "fetch_delay_ms" | "loading_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.fetch_delay_ms = v;
                }
            }
            "connect_timeout_secs" | "connect_timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.connect_timeout_secs = v;
                }
            }
            "read_timeout_secs" | "read_timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.read_timeout_secs = v;
                }
            }
            "locale" | "language" => {
                if !val.is_empty() {
                    settings.locale = val;
                }
            }
            "start_screen" | "start_tab" => {
                if let Some(s) = Screen::from_config_key(&val) {
                    settings.start_screen = s;
                } else {
                    tracing::warn!(value = %val, "unknown start_screen in settings.conf");
                }
            }
            _ => {}
        }
    }
}
