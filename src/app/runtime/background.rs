use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::{sync::mpsc, time::Duration};

/// Interval between redraw ticks that refresh relative timestamps.
pub const TICK_INTERVAL: Duration = Duration::from_secs(30);

/// What: Spawn the tick task that periodically wakes the event loop.
///
/// Details:
/// - Stops when the receiving side is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.tick().await;
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking thread that forwards terminal input events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Destination for crossterm events
/// - `cancelled`: Exit flag checked between polls
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is honored promptly.
/// - Exits when the flag is set or the receiver is gone; read errors are skipped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("[Runtime] input thread stopped");
    });
}
