//! Core non-UI logic.

pub mod screens;

pub use screens::{
    activate, apply_outcome, build_query, cycle_category, prompt_message, reload,
    select_category, status_message, submit_search, trigger,
};
