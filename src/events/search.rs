use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::submit_search;
use crate::state::{AppState, FetchRequest};

/// What: Handle a key while the search box has focus.
///
/// Details:
/// - `Enter` submits, `Esc` leaves editing without submitting; every other
///   printable key is inserted, including `q` and digits.
pub(super) fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    req_tx: &mpsc::UnboundedSender<FetchRequest>,
) {
    match ke.code {
        KeyCode::Enter => {
            submit_search(app, req_tx);
        }
        KeyCode::Esc => app.search_editing = false,
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}
