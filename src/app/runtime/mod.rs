use std::sync::Arc;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::Duration;

use crate::sources::{HttpTransport, Transport};
use crate::state::Screen;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;
mod handlers;
mod init;
pub mod workers;

use background::{TICK_INTERVAL, spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::trigger_initial_load;
pub use init::{initialize_app_state, start_screen};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Start-up choices taken from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Tab to open first.
    pub screen: Option<Screen>,
    /// Preselected Browse category (index into `CATEGORIES`).
    pub category: Option<usize>,
    /// Preset search term, submitted on start.
    pub search: Option<String>,
    /// Skip the cosmetic delay before each fetch.
    pub no_delay: bool,
}

/// What: Run the newsq TUI end-to-end.
///
/// Inputs:
/// - `opts`: Launch options parsed from the command line
///
/// Output:
/// - `Ok(())` when the user quits; `Err` on terminal or client setup failure.
///
/// Details:
/// - `NEWSQ_TEST_HEADLESS=1` skips terminal setup, drawing and the input thread.
/// - The fetch worker and tick task live as long as the event loop.
/// - The terminal is restored even when the loop exits early.
pub async fn run(opts: LaunchOptions) -> Result<()> {
    let headless = std::env::var("NEWSQ_TEST_HEADLESS").ok().as_deref() == Some("1");
    let settings = crate::theme::settings();
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::from_settings(&settings)?);
    let delay = if opts.no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(settings.fetch_delay_ms)
    };

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = initialize_app_state(&settings, &opts);
    let mut channels = Channels::new(transport, delay);
    spawn_tick_worker(channels.tick_tx.clone(), TICK_INTERVAL);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    trigger_initial_load(&mut app, &channels.req_tx);
    run_event_loop(&mut terminal, &mut app, &mut channels).await;
    cleanup_on_exit(channels).await;

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
