//! Small helpers shared across modules.

pub mod config;

use unicode_width::UnicodeWidthChar;

/// What: Check whether a URL is safe to hand to the system browser opener.
///
/// Output:
/// - `true` only for absolute `http`/`https` URLs with a host.
#[must_use]
pub fn is_browsable_url(url: &str) -> bool {
    url::Url::parse(url)
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: Story web URL.
///
/// Output:
/// - `true` when an opener was spawned, `false` when the URL was rejected.
///
/// Details:
/// - On Windows, uses `cmd /c start`; elsewhere `xdg-open`, falling back to `open` (macOS).
/// - Spawns the command in a background thread and ignores its exit status.
/// - During tests, nothing is spawned.
#[must_use]
pub fn open_url(url: &str) -> bool {
    if !is_browsable_url(url) {
        tracing::warn!(url, "[Util] refusing to open non-web URL");
        return false;
    }
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn();
            }
            #[cfg(not(target_os = "windows"))]
            {
                let _ = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
        });
    }
    true
}

/// What: Truncate text to a display width, appending `…` when cut.
///
/// Details:
/// - Measures with `unicode-width` so wide characters count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
