//! Search reducer
//!
//! Handles the search input, the request log and the sort toggle. The
//! `Submit` / `LoadMore` / `Repeat` intents are consumed by the search
//! middleware before reaching this reducer; their arms are no-ops kept
//! for totality.

use crate::actions::SearchAction;
use crate::state::{InputMode, SearchState};

/// Reduce search-related state
pub fn reduce(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::InputChanged(term) => {
            state.term = term.clone();
        }
        SearchAction::RequestIssued(url) => {
            state.request_log.push(url.clone());
            log::debug!(
                "request log grew to {} entries: {}",
                state.request_log.len(),
                url
            );
        }
        SearchAction::ToggleSort(key) => {
            state.sort = state.sort.toggled(*key);
            log::debug!(
                "sort set to {} (reversed: {})",
                state.sort.key,
                state.sort.reversed
            );
        }
        SearchAction::EnterInput => {
            state.mode = InputMode::Insert;
        }
        SearchAction::LeaveInput => {
            state.mode = InputMode::Normal;
        }
        SearchAction::Submit | SearchAction::LoadMore | SearchAction::Repeat(_) => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::SortKey;

    #[test]
    fn test_input_changed_updates_term() {
        let state = reduce(
            SearchState::default(),
            &SearchAction::InputChanged("rust".to_string()),
        );
        assert_eq!(state.term, "rust");
    }

    #[test]
    fn test_request_issued_appends_to_log() {
        let mut state = SearchState::default();
        for url in ["u1", "u2"] {
            state = reduce(state, &SearchAction::RequestIssued(url.to_string()));
        }
        assert_eq!(state.request_log, ["u1", "u2"]);
    }

    #[test]
    fn test_repeat_does_not_touch_the_input() {
        let state = SearchState::with_term("typed");
        let state = reduce(state, &SearchAction::Repeat("older".to_string()));
        assert_eq!(state.term, "typed");
    }

    #[test]
    fn test_sort_toggles_direction_on_second_activation() {
        let state = reduce(SearchState::default(), &SearchAction::ToggleSort(SortKey::Point));
        assert!(!state.sort.reversed);
        let state = reduce(state, &SearchAction::ToggleSort(SortKey::Point));
        assert!(state.sort.reversed);
    }

    #[test]
    fn test_input_mode_round_trip() {
        let state = reduce(SearchState::default(), &SearchAction::EnterInput);
        assert_eq!(state.mode, InputMode::Insert);
        let state = reduce(state, &SearchAction::LeaveInput);
        assert_eq!(state.mode, InputMode::Normal);
    }
}
