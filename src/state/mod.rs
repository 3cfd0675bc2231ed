//! Modularized state module.
//!
//! Value types live in [`types`]; the mutable container mutated by the event
//! and UI layers lives in [`app_state`].

pub mod app_state;
pub mod types;

pub use app_state::{AppState, ScreenState};
pub use types::{
    CATEGORIES, Category, Endpoint, FetchOutcome, FetchRequest, LoadPhase, ResponseStatus,
    Screen, Story, category_index,
};
