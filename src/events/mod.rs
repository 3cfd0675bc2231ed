//! Keyboard handling for the newsq TUI.
//!
//! `handle_event` dispatches one terminal event; search-box editing lives in
//! [`search`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::i18n::t_fmt1;
use crate::logic::{activate, cycle_category, reload};
use crate::state::{AppState, FetchRequest, Screen};

mod search;

/// Rows moved by `PageUp`/`PageDown`.
const PAGE_STEP: isize = 10;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    req_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    if app.show_help {
        match ke.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.show_help = false,
            _ => {}
        }
        return false;
    }
    if app.search_editing {
        search::handle_search_key(*ke, app, req_tx);
        return false;
    }
    handle_normal_key(*ke, app, req_tx)
}

/// What: Handle a key outside of search editing and the help overlay.
fn handle_normal_key(
    ke: KeyEvent,
    app: &mut AppState,
    req_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab => activate(app, app.screen.next(), req_tx),
        KeyCode::BackTab => activate(app, app.screen.prev(), req_tx),
        KeyCode::Char(c @ '1'..='3') => {
            let idx = (c as usize) - ('1' as usize);
            activate(app, Screen::ALL[idx], req_tx);
        }
        KeyCode::Left | KeyCode::Char('h') if app.screen == Screen::Browse => {
            cycle_category(app, false, req_tx);
        }
        KeyCode::Right | KeyCode::Char('l') if app.screen == Screen::Browse => {
            cycle_category(app, true, req_tx);
        }
        KeyCode::Char('/' | 'i') => {
            if app.screen != Screen::Search {
                activate(app, Screen::Search, req_tx);
            }
            app.search_editing = true;
        }
        KeyCode::Up | KeyCode::Char('k') => app.current_mut().move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.current_mut().move_selection(1),
        KeyCode::PageUp => app.current_mut().move_selection(-PAGE_STEP),
        KeyCode::PageDown => app.current_mut().move_selection(PAGE_STEP),
        KeyCode::Home | KeyCode::Char('g') => app.current_mut().select_edge(false),
        KeyCode::End | KeyCode::Char('G') => app.current_mut().select_edge(true),
        KeyCode::Enter | KeyCode::Char('o') => open_selected(app),
        KeyCode::Char('r') => {
            reload(app, req_tx);
        }
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
    false
}

/// What: Open the selected story's web page in the browser.
fn open_selected(app: &mut AppState) {
    let Some(url) = app.selected_story().map(|s| s.web_url.clone()) else {
        return;
    };
    if crate::util::open_url(&url) {
        tracing::info!(url = %url, "[Events] opening story");
        app.notice = Some(t_fmt1("app.messages.opening", &url));
    }
}
