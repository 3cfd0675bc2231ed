//! Library entry for newsq exposing the reader's core for the binary and
//! integration tests.
//!
//! `sources` talks to the content API, `logic` drives the three screens,
//! `app` owns the terminal runtime and `ui` renders frames.

pub mod app;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
