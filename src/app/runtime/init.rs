use tokio::sync::mpsc;

use crate::logic::activate;
use crate::state::{AppState, Endpoint, FetchRequest, Screen};
use crate::theme::Settings;

use super::LaunchOptions;

/// What: Build the initial application state from settings and launch options.
///
/// Inputs:
/// - `settings`: Parsed `settings.conf`
/// - `opts`: Command-line launch options
///
/// Output:
/// - `AppState` with endpoint, preselected category and search term applied.
///   No request is sent yet.
#[must_use]
pub fn initialize_app_state(settings: &Settings, opts: &LaunchOptions) -> AppState {
    let mut app = AppState {
        endpoint: Endpoint {
            scheme: settings.api_scheme.clone(),
            authority: settings.api_authority.clone(),
        },
        category: opts.category,
        ..AppState::default()
    };
    if let Some(term) = opts.search.as_deref().map(str::trim)
        && !term.is_empty()
    {
        app.search_input = term.to_string();
        app.submitted_search = Some(term.to_string());
    }
    app.screen = start_screen(settings, opts);
    tracing::info!(
        screen = ?app.screen,
        category = ?app.category,
        search = ?app.submitted_search,
        authority = %app.endpoint.authority,
        "[Runtime] initial state"
    );
    app
}

/// What: Decide which tab is shown first.
///
/// Details:
/// - An explicit `--screen` wins, then a preset search term, then a preset
///   category, then `start_screen` from settings.
#[must_use]
pub fn start_screen(settings: &Settings, opts: &LaunchOptions) -> Screen {
    if let Some(s) = opts.screen {
        s
    } else if opts.search.as_deref().is_some_and(|s| !s.trim().is_empty()) {
        Screen::Search
    } else if opts.category.is_some() {
        Screen::Browse
    } else {
        settings.start_screen
    }
}

/// What: Activate the start screen, which sends its first request if it has one.
pub fn trigger_initial_load(app: &mut AppState, req_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let screen = app.screen;
    activate(app, screen, req_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadPhase;

    #[test]
    /// What: Launch options pick the start tab in priority order.
    fn start_screen_priority() {
        let settings = Settings {
            start_screen: Screen::Browse,
            ..Settings::default()
        };
        let none = LaunchOptions::default();
        assert_eq!(start_screen(&settings, &none), Screen::Browse);

        let search = LaunchOptions {
            search: Some("rust".into()),
            ..LaunchOptions::default()
        };
        assert_eq!(start_screen(&settings, &search), Screen::Search);

        let explicit = LaunchOptions {
            screen: Some(Screen::World),
            search: Some("rust".into()),
            ..LaunchOptions::default()
        };
        assert_eq!(start_screen(&settings, &explicit), Screen::World);
    }

    #[test]
    fn preset_search_loads_on_start() {
        let opts = LaunchOptions {
            search: Some("  moon  ".into()),
            ..LaunchOptions::default()
        };
        let mut app = initialize_app_state(&Settings::default(), &opts);
        assert_eq!(app.screen, Screen::Search);
        assert_eq!(app.submitted_search.as_deref(), Some("moon"));

        let (tx, mut rx) = mpsc::unbounded_channel();
        trigger_initial_load(&mut app, &tx);
        assert_eq!(app.search.phase, LoadPhase::Loading);
        assert_eq!(rx.try_recv().expect("request").screen, Screen::Search);
    }
}
