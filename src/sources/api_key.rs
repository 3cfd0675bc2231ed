//! API key storage.
//!
//! The key is kept base64-encoded in config and binaries and decoded once on
//! first use. This is obfuscation only.

use std::sync::OnceLock;

use base64::Engine;
use tracing::{debug, warn};

/// Environment variable (runtime and build time) carrying the encoded key.
pub const API_KEY_ENV: &str = "NEWSQ_API_KEY";

/// Encoded public developer key (`test`).
pub const BUILT_IN_KEY: &str = "dGVzdA==";

/// Decoded key, set on first use.
static API_KEY: OnceLock<String> = OnceLock::new();

/// Why an encoded key could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    /// Blank input.
    #[error("api key is empty")]
    Empty,
    /// Input is not valid base64.
    #[error("api key is not valid base64: {0}")]
    Base64(String),
    /// Decoded bytes are not UTF-8.
    #[error("api key does not decode to UTF-8 text")]
    Utf8,
}

/// What: Decode a base64-encoded API key.
///
/// # Errors
/// - `Empty` for blank input, `Base64` or `Utf8` when decoding fails.
pub fn decode_api_key(encoded: &str) -> Result<String, ApiKeyError> {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return Err(ApiKeyError::Empty);
    }
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(trimmed)
        .map_err(|e| ApiKeyError::Base64(e.to_string()))?;
    let key = String::from_utf8(bytes).map_err(|_| ApiKeyError::Utf8)?;
    if key.trim().is_empty() {
        return Err(ApiKeyError::Empty);
    }
    Ok(key)
}

/// What: Pick the encoded key from the first source that provides one.
///
/// Inputs:
/// - `env`: Runtime environment value
/// - `configured`: `api_key` from settings.conf
/// - `build_time`: Value baked in at compile time
///
/// Output:
/// - `(encoded_key, source_name)`; falls back to [`BUILT_IN_KEY`].
fn select_encoded(
    env: Option<String>,
    configured: Option<String>,
    build_time: Option<&'static str>,
) -> (String, &'static str) {
    let non_blank = |s: &String| !s.trim().is_empty();
    if let Some(v) = env.filter(non_blank) {
        return (v, "environment");
    }
    if let Some(v) = configured.filter(non_blank) {
        return (v, "settings");
    }
    if let Some(v) = build_time.map(str::to_string).filter(non_blank) {
        return (v, "build");
    }
    (BUILT_IN_KEY.to_string(), "built-in")
}

/// What: Resolve and decode a key, falling back to the built-in one on error.
fn resolve(
    env: Option<String>,
    configured: Option<String>,
    build_time: Option<&'static str>,
) -> String {
    let (encoded, source) = select_encoded(env, configured, build_time);
    match decode_api_key(&encoded) {
        Ok(key) => {
            debug!(source, "[ApiKey] using configured key");
            key
        }
        Err(e) => {
            warn!(source, error = %e, "[ApiKey] invalid key, using built-in key");
            decode_api_key(BUILT_IN_KEY).unwrap_or_default()
        }
    }
}

/// What: Process-wide decoded API key.
///
/// Details:
/// - Resolved on first call from env, settings, build-time value, then built-in.
#[must_use]
pub fn api_key() -> &'static str {
    API_KEY.get_or_init(|| {
        resolve(
            std::env::var(API_KEY_ENV).ok(),
            crate::theme::settings().api_key,
            option_env!("NEWSQ_API_KEY"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_key_decodes_to_test() {
        assert_eq!(decode_api_key(BUILT_IN_KEY).as_deref(), Ok("test"));
        assert_eq!(decode_api_key("  a2V5\n").as_deref(), Ok("key"));
    }

    #[test]
    fn bad_keys_are_reported() {
        assert_eq!(decode_api_key(""), Err(ApiKeyError::Empty));
        assert!(matches!(
            decode_api_key("not base64!"),
            Err(ApiKeyError::Base64(_))
        ));
        assert_eq!(decode_api_key("//8="), Err(ApiKeyError::Utf8));
    }

    #[test]
    /// What: First non-blank source wins; invalid keys fall back to the built-in one.
    ///
    /// Inputs:
    /// - Combinations of env, settings and build-time values.
    ///
    /// Output:
    /// - Decoded key of the winning source, or `test`.
    fn source_priority_and_fallback() {
        assert_eq!(
            resolve(Some("ZW52".into()), Some("Y2Zn".into()), Some("YnVpbGQ=")),
            "env"
        );
        assert_eq!(
            resolve(Some("  ".into()), Some("Y2Zn".into()), Some("YnVpbGQ=")),
            "cfg"
        );
        assert_eq!(resolve(None, None, Some("YnVpbGQ=")), "build");
        assert_eq!(resolve(None, None, None), "test");
        assert_eq!(resolve(Some("%%%".into()), None, None), "test");
    }
}
