//! Text transforms applied to story fields before display.

use chrono::{DateTime, Utc};
use scraper::Html;

use crate::i18n::{t, t_fmt1};

/// What: Remove `<br>` line-break markup in any of its spellings.
///
/// Details:
/// - Matches `<br>`, `<br/>`, `<br />` case-insensitively; each is replaced
///   by a space so adjacent words stay separated.
fn strip_line_breaks(input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while let Some(rel) = lower[i..].find("<br") {
        let start = i + rel;
        let rest = &lower[start + 3..];
        let inner = rest.trim_start();
        let inner = inner.strip_prefix('/').unwrap_or(inner).trim_start();
        if inner.starts_with('>') {
            let end = lower.len() - inner.len() + 1;
            out.push_str(&input[i..start]);
            out.push(' ');
            i = end;
        } else {
            out.push_str(&input[i..start + 3]);
            i = start + 3;
        }
    }
    out.push_str(&input[i..]);
    out
}

/// What: Convert an HTML snippet into plain display text.
///
/// Inputs:
/// - `html`: Trail text or headline that may contain markup and entities
///
/// Output:
/// - Text with `<br>` removed, other tags stripped, entities decoded and
///   whitespace collapsed.
#[must_use]
pub fn clean_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let without_breaks = strip_line_breaks(html);
    let fragment = Html::parse_fragment(&without_breaks);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// What: Whether `ch` is a Unicode space separator (categories Zs, Zl, Zp).
///
/// Details:
/// - Tabs and newlines are control characters, not separators.
const fn is_space_separator(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// What: Title-case a label.
///
/// Details:
/// - Lower-cases everything, then upper-cases the first character and every
///   character that follows a space separator. Spacing is preserved.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if is_space_separator(ch) {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// What: Human relative time for a publication timestamp.
///
/// Inputs:
/// - `published`: RFC 3339 timestamp from the API
/// - `now`: Reference time
///
/// Output:
/// - `Some(text)` such as `5 minutes ago`, `3 hours ago`, `Yesterday`,
///   `4 days ago` or `Oct 3, 2025`; `None` for unparsable or future times.
///
/// Details:
/// - Minute resolution, floored.
#[must_use]
pub fn relative_time(published: &str, now: DateTime<Utc>) -> Option<String> {
    let when = DateTime::parse_from_rfc3339(published.trim())
        .ok()?
        .with_timezone(&Utc);
    let elapsed = now.signed_duration_since(when);
    if elapsed < chrono::Duration::zero() {
        return None;
    }
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    let text = match (minutes, hours, days) {
        (1, _, _) => t("app.time.minute_ago"),
        (m, _, _) if m < 60 => t_fmt1("app.time.minutes_ago", m),
        (_, 1, _) => t("app.time.hour_ago"),
        (_, h, _) if h < 24 => t_fmt1("app.time.hours_ago", h),
        (_, _, 1) => t("app.time.yesterday"),
        (_, _, d) if d < 7 => t_fmt1("app.time.days_ago", d),
        _ => when.format("%b %-d, %Y").to_string(),
    };
    Some(text)
}
