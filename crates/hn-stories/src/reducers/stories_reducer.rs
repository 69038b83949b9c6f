//! Stories reducer
//!
//! Drives the fetch lifecycle and the story list. Fetch settlements
//! carry the sequence number assigned at issue time; only the latest
//! issued fetch may settle into state, so a slow older response can
//! never overwrite the result of a newer search. Discarding a stale
//! settlement is not an error condition.

use crate::actions::StoriesAction;
use crate::state::StoriesState;

/// Reduce story list state
pub fn reduce(mut state: StoriesState, action: &StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit { seq } => {
            state.is_loading = true;
            state.is_error = false;
            state.in_flight = Some(*seq);
            log::debug!("fetch #{} started", seq);
        }

        StoriesAction::FetchSuccess { seq, list, page } => {
            if state.in_flight != Some(*seq) {
                log::info!(
                    "discarding stale fetch #{} result ({} hits)",
                    seq,
                    list.len()
                );
                return state;
            }
            state.is_loading = false;
            state.is_error = false;
            state.in_flight = None;
            if *page == 0 {
                // A fresh search replaces whatever was on screen
                state.data = list.clone();
                state.selected = 0;
            } else {
                state.data.extend(list.iter().cloned());
            }
            state.page = *page;
            state.revision += 1;
            log::info!(
                "fetch #{} delivered {} stories (page {}, {} total)",
                seq,
                list.len(),
                page,
                state.data.len()
            );
        }

        StoriesAction::FetchFailure { seq } => {
            if state.in_flight != Some(*seq) {
                log::info!("discarding stale fetch #{} failure", seq);
                return state;
            }
            state.is_loading = false;
            state.is_error = true;
            state.in_flight = None;
            log::error!("fetch #{} failed", seq);
        }

        StoriesAction::Remove { object_id } => {
            let before = state.data.len();
            state.data.retain(|story| story.object_id != *object_id);
            if state.data.len() != before {
                state.revision += 1;
                state.selected = state.selected.min(state.data.len().saturating_sub(1));
                log::debug!("removed story {}", object_id);
            }
        }

        StoriesAction::SelectNext => {
            if !state.data.is_empty() {
                state.selected = (state.selected + 1) % state.data.len();
            }
        }

        StoriesAction::SelectPrevious => {
            if !state.data.is_empty() {
                state.selected = if state.selected == 0 {
                    state.data.len() - 1
                } else {
                    state.selected - 1
                };
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Story;

    fn story(id: &str, comments: u64) -> Story {
        Story {
            object_id: id.to_string(),
            title: format!("story {id}"),
            url: String::new(),
            author: String::new(),
            num_comments: comments,
            points: 0,
        }
    }

    fn success(seq: u64, ids: &[&str], page: u32) -> StoriesAction {
        StoriesAction::FetchSuccess {
            seq,
            list: ids.iter().map(|id| story(id, 0)).collect(),
            page,
        }
    }

    fn ids(state: &StoriesState) -> Vec<&str> {
        state.data.iter().map(|s| s.object_id.as_str()).collect()
    }

    #[test]
    fn test_init_sets_loading_and_clears_error() {
        let mut state = StoriesState::default();
        state.is_error = true;
        let state = reduce(state, &StoriesAction::FetchInit { seq: 1 });
        assert!(state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.in_flight, Some(1));
    }

    #[test]
    fn test_page_zero_replaces_data() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &success(1, &["a", "b"], 0));
        assert_eq!(ids(&state), ["a", "b"]);
        assert!(!state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.page, 0);

        // A later fresh search throws the old results away
        let state = reduce(state, &StoriesAction::FetchInit { seq: 2 });
        let state = reduce(state, &success(2, &["c"], 0));
        assert_eq!(ids(&state), ["c"]);
    }

    #[test]
    fn test_later_pages_append() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &success(1, &["a", "b"], 0));
        let state = reduce(state, &StoriesAction::FetchInit { seq: 2 });
        let state = reduce(state, &success(2, &["c", "d"], 1));
        assert_eq!(ids(&state), ["a", "b", "c", "d"]);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_failure_keeps_prior_data() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &success(1, &["a"], 0));
        let state = reduce(state, &StoriesAction::FetchInit { seq: 2 });
        let state = reduce(state, &StoriesAction::FetchFailure { seq: 2 });
        assert!(state.is_error);
        assert!(!state.is_loading);
        assert_eq!(ids(&state), ["a"]);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_first_load_failure_leaves_data_empty() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &StoriesAction::FetchFailure { seq: 1 });
        assert!(state.is_error);
        assert!(state.data.is_empty());
    }

    #[test]
    fn test_remove_drops_exactly_one_story() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &success(1, &["a", "b"], 0));
        let state = reduce(
            state,
            &StoriesAction::Remove {
                object_id: "a".to_string(),
            },
        );
        assert_eq!(ids(&state), ["b"]);
        assert_eq!(state.data.len(), 1);
    }

    #[test]
    fn test_remove_of_absent_id_is_idempotent() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &success(1, &["a", "b"], 0));
        let revision = state.revision;
        let state = reduce(
            state,
            &StoriesAction::Remove {
                object_id: "zzz".to_string(),
            },
        );
        assert_eq!(state.data.len(), 2);
        assert_eq!(state.revision, revision);
    }

    #[test]
    fn test_stale_success_is_discarded() {
        // Search "React" (seq 1), then "JavaScript" (seq 2). The newer
        // fetch settles first; the older result must not overwrite it.
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &StoriesAction::FetchInit { seq: 2 });
        let state = reduce(state, &success(2, &["js1", "js2"], 0));
        assert_eq!(ids(&state), ["js1", "js2"]);

        let state = reduce(state, &success(1, &["react1"], 0));
        assert_eq!(ids(&state), ["js1", "js2"]);
        assert_eq!(state.page, 0);
        assert!(!state.is_error);
    }

    #[test]
    fn test_superseded_settlement_keeps_loading_for_the_newer_fetch() {
        // The older fetch settles while the newer one is still in
        // flight: the spinner must stay on
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &StoriesAction::FetchInit { seq: 2 });
        let state = reduce(state, &success(1, &["old"], 0));
        assert!(state.is_loading);
        assert!(state.data.is_empty());

        let state = reduce(state, &success(2, &["new"], 0));
        assert!(!state.is_loading);
        assert_eq!(ids(&state), ["new"]);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let state = reduce(state, &StoriesAction::FetchInit { seq: 2 });
        let state = reduce(state, &success(2, &["a"], 0));
        let state = reduce(state, &StoriesAction::FetchFailure { seq: 1 });
        assert!(!state.is_error);
        assert_eq!(ids(&state), ["a"]);
    }

    #[test]
    fn test_loading_and_error_never_both_set() {
        let mut state = StoriesState::default();
        for action in [
            StoriesAction::FetchInit { seq: 1 },
            StoriesAction::FetchFailure { seq: 1 },
            StoriesAction::FetchInit { seq: 2 },
            success(2, &["a"], 0),
        ] {
            state = reduce(state, &action);
            assert!(!(state.is_loading && state.is_error));
        }
    }

    #[test]
    fn test_selection_wraps() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let mut state = reduce(state, &success(1, &["a", "b", "c"], 0));
        state = reduce(state, &StoriesAction::SelectPrevious);
        assert_eq!(state.selected, 2);
        state = reduce(state, &StoriesAction::SelectNext);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_remove_clamps_selection() {
        let state = reduce(StoriesState::default(), &StoriesAction::FetchInit { seq: 1 });
        let mut state = reduce(state, &success(1, &["a", "b", "c"], 0));
        state.selected = 2;
        let state = reduce(
            state,
            &StoriesAction::Remove {
                object_id: "c".to_string(),
            },
        );
        assert_eq!(state.selected, 1);
    }
}
