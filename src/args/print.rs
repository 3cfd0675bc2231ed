//! One-shot `--print` mode: fetch one tab and write it to stdout.

use std::io::Write;

use chrono::Utc;
use newsq::app::{LaunchOptions, initialize_app_state};
use newsq::logic::{build_query, prompt_message, status_message};
use newsq::sources::{HttpTransport, api_url, load_stories};
use newsq::state::Story;
use newsq::ui::format::{clean_text, relative_time, title_case};

/// What: Format one story as plain text for the terminal.
///
/// Output:
/// - Headline line, then section and relative time, then the web URL.
fn format_story(story: &Story, now: chrono::DateTime<Utc>) -> String {
    let headline = clean_text(story.display_headline());
    let section = title_case(&story.section_name);
    let when = relative_time(&story.published, now).unwrap_or_default();
    let meta = if when.is_empty() {
        section
    } else {
        format!("{section} · {when}")
    };
    format!("{headline}\n  {meta}\n  {}\n", story.web_url)
}

/// What: Fetch the start tab once and print its stories.
///
/// Inputs:
/// - `opts`: Launch options choosing the tab, category and search term
///
/// Output:
/// - Process exit code: `0` on success, `1` on a failed request, `2` when the
///   tab has nothing to fetch (no category or search term).
///
/// Details:
/// - No cosmetic delay; the connectivity check still runs first.
pub async fn run_print(opts: &LaunchOptions) -> u8 {
    let settings = newsq::theme::settings();
    let app = initialize_app_state(&settings, opts);
    tracing::info!(screen = ?app.screen, "print mode requested from CLI");

    let Some(params) = build_query(&app, app.screen) else {
        eprintln!("{}", prompt_message(app.screen));
        return 2;
    };
    let url = match api_url(&params) {
        Ok(u) => Some(u),
        Err(e) => {
            tracing::warn!(error = %e, "query rejected");
            None
        }
    };
    let transport = match HttpTransport::from_settings(&settings) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            eprintln!("{e}");
            return 1;
        }
    };

    match load_stories(&transport, url.as_ref()).await {
        Ok(stories) => {
            let now = Utc::now();
            let mut out = std::io::stdout().lock();
            for story in &stories {
                if writeln!(out, "{}", format_story(story, now)).is_err() {
                    break;
                }
            }
            tracing::info!(count = stories.len(), "printed stories");
            0
        }
        Err(status) => {
            tracing::warn!(%status, "print mode request failed");
            eprintln!("{}", status_message(&status));
            1
        }
    }
}
