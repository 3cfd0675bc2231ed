use std::sync::atomic::Ordering;

use tokio::time::Duration;

use super::channels::Channels;

/// Grace period for the fetch worker to wind down on exit.
const WORKER_SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// What: Stop background work before the terminal is restored.
///
/// Details:
/// - Signals the input thread, then closes the request channel so the fetch
///   worker aborts in-flight requests and returns.
/// - The worker is awaited for a short grace period and aborted if it is
///   still running after that.
pub async fn cleanup_on_exit(channels: Channels) {
    tracing::debug!("[Runtime] main loop exited, stopping workers");
    let Channels {
        event_thread_cancelled,
        req_tx,
        fetch_worker,
        ..
    } = channels;
    event_thread_cancelled.store(true, Ordering::Relaxed);
    drop(req_tx);

    let abort = fetch_worker.abort_handle();
    match tokio::time::timeout(WORKER_SHUTDOWN_GRACE, fetch_worker).await {
        Ok(Ok(())) => tracing::debug!("[Runtime] fetch worker stopped"),
        Ok(Err(e)) => tracing::warn!(error = %e, "[Runtime] fetch worker ended abnormally"),
        Err(_) => {
            tracing::warn!("[Runtime] fetch worker did not stop in time, aborting");
            abort.abort();
        }
    }
}
