//! Search State

use crate::domain_models::SortState;

/// Which part of the screen receives plain key presses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and hotkeys
    #[default]
    Normal,
    /// Typing into the search box
    Insert,
}

/// Search box, request log and sort state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current content of the search input
    pub term: String,
    /// Append-only log of issued request URLs, one per fetch. Source of
    /// truth for the recent-search row and for load-more pagination.
    pub request_log: Vec<String>,
    pub sort: SortState,
    pub mode: InputMode,
}

impl SearchState {
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }
}
