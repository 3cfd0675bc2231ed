use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::{sync::mpsc, task::JoinHandle, time::Duration};

use crate::sources::Transport;
use crate::state::{FetchOutcome, FetchRequest};

use super::workers::fetch::spawn_fetch_worker;

/// What: Channel endpoints shared by the event loop and background workers.
///
/// Details:
/// - Dropping `req_tx` (with the rest of this struct) stops the fetch worker
///   and aborts any request still in flight.
pub struct Channels {
    /// Sender handed to the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal input events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests to the fetch worker.
    pub req_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Results from the fetch worker.
    pub outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// Sender handed to the tick task.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Periodic redraw ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Dispatcher task of the fetch worker.
    pub fetch_worker: JoinHandle<()>,
}

impl Channels {
    /// What: Create all channels and start the fetch worker.
    ///
    /// Inputs:
    /// - `transport`: Network capability for the worker
    /// - `delay`: Cosmetic delay applied before each fetch
    ///
    /// Output:
    /// - Ready-to-use `Channels`.
    pub fn new(transport: Arc<dyn Transport>, delay: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (req_tx, req_rx) = mpsc::unbounded_channel::<FetchRequest>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let fetch_worker = spawn_fetch_worker(req_rx, outcome_tx, transport, delay);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            req_tx,
            outcome_rx,
            tick_tx,
            tick_rx,
            fetch_worker,
        }
    }
}
