//! newsq application module: terminal handling, event loop and background workers.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::workers::fetch::spawn_fetch_worker;
pub use runtime::{LaunchOptions, initialize_app_state, run, start_screen};
