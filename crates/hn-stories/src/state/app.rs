//! Application State

use super::{SearchState, StoriesState};

/// Application state
///
/// Cloned as a snapshot for the middleware thread on every action, so
/// keep the contained types cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub running: bool,
    pub search: SearchState,
    pub stories: StoriesState,
}

impl AppState {
    /// Initial state for a remembered search term
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            running: true,
            search: SearchState::with_term(term),
            stories: StoriesState::default(),
        }
    }
}
