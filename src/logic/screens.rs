//! Per-screen controllers: query construction, triggering, and applying results.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::i18n::{t, t_fmt1};
use crate::sources::query::{AUTHORITY, PATH, SCHEME};
use crate::sources::{QueryParams, api_url};
use crate::state::{
    AppState, CATEGORIES, FetchOutcome, FetchRequest, LoadPhase, ResponseStatus, Screen,
};

/// Fixed page size for every request.
pub const PAGE_SIZE: &str = "30";
/// Optional story fields requested from the API.
pub const SHOW_FIELDS: &str = "headline,byline,trailText";

/// What: Add the parameters shared by the World and Browse listings.
fn with_listing_params(params: QueryParams) -> QueryParams {
    params
        .with("show-fields", SHOW_FIELDS)
        .with("page-size", PAGE_SIZE)
        .with("use-date", "last-modified")
        .with("order-by", "newest")
}

/// What: Build the request parameters for a screen.
///
/// Inputs:
/// - `app`: Supplies endpoint, selected category and submitted search term
/// - `screen`: Screen to build for
///
/// Output:
/// - `Some(QueryParams)` ready for the query builder; `None` when the screen
///   has nothing to ask for yet (no category, blank search).
#[must_use]
pub fn build_query(app: &AppState, screen: Screen) -> Option<QueryParams> {
    let base = QueryParams::new()
        .with(SCHEME, &app.endpoint.scheme)
        .with(AUTHORITY, &app.endpoint.authority);
    match screen {
        Screen::World => Some(with_listing_params(base.with(PATH, "world"))),
        Screen::Browse => app
            .selected_category()
            .map(|c| with_listing_params(base.with(PATH, c.section))),
        Screen::Search => {
            let term = app.submitted_search.as_deref().map(str::trim)?;
            if term.is_empty() {
                return None;
            }
            Some(
                base.with(PATH, "search")
                    .with("q", term)
                    .with("show-fields", SHOW_FIELDS)
                    .with("page-size", PAGE_SIZE),
            )
        }
    }
}

/// What: Prompt shown on a screen that has not requested anything.
#[must_use]
pub fn prompt_message(screen: Screen) -> String {
    match screen {
        Screen::World => t("app.prompts.world"),
        Screen::Browse => t("app.prompts.browse"),
        Screen::Search => t("app.prompts.search"),
    }
}

/// What: Localized user-facing text for a failed request.
#[must_use]
pub fn status_message(status: &ResponseStatus) -> String {
    match status {
        ResponseStatus::HttpError { code, message } => {
            let text = format!("{code} {message}");
            t_fmt1("app.messages.http_error", text.trim_end())
        }
        ResponseStatus::ConnectionError(_) => t("app.messages.problem_with_request"),
        ResponseStatus::ParseError(_) => t("app.messages.parse_error"),
        ResponseStatus::EmptyResult => t("app.messages.no_results"),
        ResponseStatus::NetworkUnavailable => t("app.messages.no_network"),
    }
}

/// What: Start a fresh request for `screen`.
///
/// Inputs:
/// - `app`: Application state; the screen's list, phase and sequence are updated
/// - `screen`: Screen to load
/// - `req_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` when a request was sent, `false` when the screen only shows its prompt.
///
/// Details:
/// - The sequence number is bumped in both cases so results of any earlier
///   request for this screen are discarded on arrival.
/// - A parameter set the builder rejects is still sent with `url: None`,
///   which the transport reports as a connection error.
pub fn trigger(
    app: &mut AppState,
    screen: Screen,
    req_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let Some(params) = build_query(app, screen) else {
        let st = app.screen_state_mut(screen);
        st.next_seq();
        st.stories.clear();
        st.list_state.select(None);
        st.phase = LoadPhase::Idle;
        st.message = Some(prompt_message(screen));
        return false;
    };
    let url = match api_url(&params) {
        Ok(u) => Some(u),
        Err(e) => {
            warn!(?screen, error = %e, "[Screens] query rejected");
            None
        }
    };
    let st = app.screen_state_mut(screen);
    let seq = st.next_seq();
    st.stories.clear();
    st.list_state.select(None);
    st.phase = LoadPhase::Loading;
    st.message = None;
    debug!(?screen, seq, "[Screens] request triggered");
    if req_tx.send(FetchRequest { screen, seq, url }).is_err() {
        warn!(?screen, "[Screens] fetch worker is gone");
        st.phase = LoadPhase::Failed;
        st.message = Some(status_message(&ResponseStatus::ConnectionError(
            "worker stopped".to_string(),
        )));
    }
    true
}

/// What: Apply a worker result to the screen that requested it.
///
/// Output:
/// - `true` when applied, `false` when the outcome was stale and dropped.
pub fn apply_outcome(app: &mut AppState, outcome: FetchOutcome) -> bool {
    let st = app.screen_state_mut(outcome.screen);
    if outcome.seq != st.latest_seq {
        debug!(
            screen = ?outcome.screen,
            seq = outcome.seq,
            latest = st.latest_seq,
            "[Screens] stale outcome discarded"
        );
        return false;
    }
    match outcome.result {
        Ok(stories) => {
            debug!(screen = ?outcome.screen, count = stories.len(), "[Screens] stories delivered");
            st.list_state
                .select(if stories.is_empty() { None } else { Some(0) });
            st.stories = stories;
            st.phase = LoadPhase::Delivered;
            st.message = None;
        }
        Err(status) => {
            debug!(screen = ?outcome.screen, %status, "[Screens] request failed");
            st.stories.clear();
            st.list_state.select(None);
            st.phase = LoadPhase::Failed;
            st.message = Some(status_message(&status));
        }
    }
    true
}

/// What: Make `screen` visible and load it if this is its first activation.
///
/// Details:
/// - World loads immediately; Browse and Search show their prompt until a
///   category is chosen or a term is submitted.
pub fn activate(app: &mut AppState, screen: Screen, req_tx: &mpsc::UnboundedSender<FetchRequest>) {
    app.screen = screen;
    if app.screen_state(screen).phase != LoadPhase::Idle {
        return;
    }
    if screen == Screen::World || build_query(app, screen).is_some() {
        trigger(app, screen, req_tx);
    } else {
        app.screen_state_mut(screen).message = Some(prompt_message(screen));
    }
}

/// What: Re-run the visible screen's request.
pub fn reload(app: &mut AppState, req_tx: &mpsc::UnboundedSender<FetchRequest>) -> bool {
    let screen = app.screen;
    trigger(app, screen, req_tx)
}

/// What: Select a Browse category and load it when the selection changed.
pub fn select_category(
    app: &mut AppState,
    index: usize,
    req_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    if index >= CATEGORIES.len() || app.category == Some(index) {
        return false;
    }
    app.category = Some(index);
    trigger(app, Screen::Browse, req_tx)
}

/// What: Step the Browse category left or right, wrapping around.
///
/// Details:
/// - With no category selected, stepping right picks the first and left the last.
pub fn cycle_category(
    app: &mut AppState,
    forward: bool,
    req_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let n = CATEGORIES.len();
    let next = match (app.category, forward) {
        (None, true) => 0,
        (None, false) => n - 1,
        (Some(i), true) => (i + 1) % n,
        (Some(i), false) => (i + n - 1) % n,
    };
    select_category(app, next, req_tx)
}

/// What: Submit the search box contents.
///
/// Details:
/// - A blank term clears the Search screen back to its prompt.
pub fn submit_search(app: &mut AppState, req_tx: &mpsc::UnboundedSender<FetchRequest>) -> bool {
    app.search_editing = false;
    let term = app.search_input.trim().to_string();
    app.submitted_search = if term.is_empty() { None } else { Some(term) };
    trigger(app, Screen::Search, req_tx)
}
