use std::io::Stdout;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_outcome, handle_tick};

/// What: Drive rendering and dispatch until the user quits.
///
/// Inputs:
/// - `terminal`: Render target, `None` in headless mode
/// - `app`: Application state
/// - `channels`: Input, outcome and tick receivers plus the request sender
///
/// Details:
/// - Redraws before waiting on the next message so every change is visible.
/// - Never awaits network I/O itself; results arrive on `outcome_rx`.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, app, &channels.req_tx) {
                    break;
                }
            }
            Some(outcome) = channels.outcome_rx.recv() => {
                handle_outcome(app, outcome);
            }
            Some(()) = channels.tick_rx.recv() => {
                handle_tick(app);
            }
            else => break,
        }
    }
}
