//! Root reducer
//!
//! Dispatches tagged actions to the per-domain sub-reducers. The action
//! enums are closed, so every action kind is handled by construction -
//! there is no unknown-action arm to fail on at runtime.

use crate::actions::{Action, GlobalAction};
use crate::reducers::{search_reducer, stories_reducer};
use crate::state::AppState;

/// Produce the next application state for an action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {
            // Raw key events are translated by the keyboard middleware
            // and consumed there; nothing to reduce
        }
        Action::Search(action) => {
            state.search = search_reducer::reduce(state.search, action);
        }
        Action::Stories(action) => {
            state.stories = stories_reducer::reduce(state.stories, action);
        }
    }
    state
}
