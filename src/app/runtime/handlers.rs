use crate::logic::apply_outcome;
use crate::state::{AppState, FetchOutcome};

/// What: Apply a fetch outcome to the state of the screen that asked for it.
///
/// Details:
/// - Stale outcomes are dropped by the controller and only logged here.
pub fn handle_outcome(app: &mut AppState, outcome: FetchOutcome) {
    let screen = outcome.screen;
    let seq = outcome.seq;
    if !apply_outcome(app, outcome) {
        tracing::trace!(?screen, seq, "[Runtime] ignored stale outcome");
    }
}

/// What: Periodic tick; relative times are recomputed on the redraw that follows.
pub fn handle_tick(app: &mut AppState) {
    app.notice = None;
}
