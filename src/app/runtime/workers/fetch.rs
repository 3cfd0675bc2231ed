use std::collections::HashMap;
use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle, time::Duration};
use tracing::debug;

use crate::sources::{Transport, fetch_stories};
use crate::state::{FetchOutcome, FetchRequest, ResponseStatus, Screen};

/// What: Spawn the background worker that services story requests.
///
/// Inputs:
/// - `req_rx`: Requests from the screen controllers
/// - `outcome_tx`: Channel back to the event loop
/// - `transport`: Network capability (real or fake)
/// - `delay`: Cosmetic pause before each fetch so the loading state is visible
///
/// Output:
/// - Handle of the dispatcher task; it finishes when `req_rx` closes.
///
/// Details:
/// - The connectivity check runs before the delay, so an offline screen
///   reports `NetworkUnavailable` at once and nothing is fetched.
/// - Each request runs in its own task. A new request for a screen aborts
///   that screen's in-flight task; requests for other screens are untouched.
/// - Closing the request channel aborts every in-flight task.
/// - Sends on a closed outcome channel are ignored.
pub fn spawn_fetch_worker(
    mut req_rx: mpsc::UnboundedReceiver<FetchRequest>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    transport: Arc<dyn Transport>,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut in_flight: HashMap<Screen, JoinHandle<()>> = HashMap::new();
        while let Some(req) = req_rx.recv().await {
            if let Some(prev) = in_flight.remove(&req.screen)
                && !prev.is_finished()
            {
                debug!(screen = ?req.screen, seq = req.seq, "[Fetch] superseding in-flight request");
                prev.abort();
            }
            in_flight.retain(|_, h| !h.is_finished());

            let screen = req.screen;
            let tx = outcome_tx.clone();
            let transport = Arc::clone(&transport);
            let handle = tokio::spawn(async move {
                let result = if transport.is_connected().await {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    fetch_stories(transport.as_ref(), req.url.as_ref()).await
                } else {
                    debug!(screen = ?req.screen, "[Fetch] offline, request skipped");
                    Err(ResponseStatus::NetworkUnavailable)
                };
                debug!(screen = ?req.screen, seq = req.seq, ok = result.is_ok(), "[Fetch] request finished");
                let _ = tx.send(FetchOutcome {
                    screen: req.screen,
                    seq: req.seq,
                    result,
                });
            });
            in_flight.insert(screen, handle);
        }
        for (_, handle) in in_flight.drain() {
            handle.abort();
        }
        debug!("[Fetch] request channel closed, worker stopped");
    })
}
