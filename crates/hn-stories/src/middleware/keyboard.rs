//! Keyboard middleware - converts raw key events to semantic actions
//!
//! Key handling is modal, vim-style: normal mode drives the story list,
//! insert mode types into the search box. The raw key event is always
//! consumed here; reducers only ever see semantic actions.

use crate::actions::{Action, GlobalAction, SearchAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{last_searches, sorted_view, SortKey};
use crate::middleware::Middleware;
use crate::state::{AppState, InputMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            match state.search.mode {
                InputMode::Insert => handle_insert_mode(key, state, dispatcher),
                InputMode::Normal => handle_normal_mode(key, state, dispatcher),
            }
            return false;
        }
        true
    }
}

fn handle_insert_mode(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Esc => {
            dispatcher.dispatch(Action::Search(SearchAction::LeaveInput));
        }
        KeyCode::Enter => {
            dispatcher.dispatch(Action::Search(SearchAction::LeaveInput));
            dispatcher.dispatch(Action::Search(SearchAction::Submit));
        }
        KeyCode::Backspace => {
            let mut term = state.search.term.clone();
            term.pop();
            dispatcher.dispatch(Action::Search(SearchAction::InputChanged(term)));
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Search(SearchAction::InputChanged(String::new())));
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut term = state.search.term.clone();
            term.push(c);
            dispatcher.dispatch(Action::Search(SearchAction::InputChanged(term)));
        }
        _ => {}
    }
}

fn handle_normal_mode(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }

        // Focus the search box
        KeyCode::Char('i') | KeyCode::Char('/') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Search(SearchAction::EnterInput));
        }

        // Vim navigation over the story list
        KeyCode::Char('j') | KeyCode::Down => {
            dispatcher.dispatch(Action::Stories(StoriesAction::SelectNext));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            dispatcher.dispatch(Action::Stories(StoriesAction::SelectPrevious));
        }

        // Drop the story under the cursor; the cursor indexes the
        // displayed ordering, so resolve through the sorted view
        KeyCode::Char('d') if key.modifiers == KeyModifiers::NONE => {
            let order = sorted_view(
                &state.stories.data,
                state.search.sort.key,
                state.search.sort.reversed,
            );
            if let Some(story) = order.get(state.stories.selected) {
                dispatcher.dispatch(Action::Stories(StoriesAction::Remove {
                    object_id: story.object_id.clone(),
                }));
            }
        }

        // Next page; hidden while a fetch is in flight
        KeyCode::Char('m') if key.modifiers == KeyModifiers::NONE => {
            if !state.stories.is_loading {
                dispatcher.dispatch(Action::Search(SearchAction::LoadMore));
            }
        }

        // Sort hotkeys
        KeyCode::Char('t') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Search(SearchAction::ToggleSort(SortKey::Title)));
        }
        KeyCode::Char('a') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Search(SearchAction::ToggleSort(SortKey::Author)));
        }
        KeyCode::Char('p') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Search(SearchAction::ToggleSort(SortKey::Point)));
        }
        KeyCode::Char('o') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Search(SearchAction::ToggleSort(SortKey::None)));
        }

        // Replay one of the recent searches
        KeyCode::Char(c @ '1'..='5') if key.modifiers == KeyModifiers::NONE => {
            let recent = last_searches(&state.search.request_log);
            let index = c as usize - '1' as usize;
            if let Some(term) = recent.get(index) {
                dispatcher.dispatch(Action::Search(SearchAction::Repeat(term.clone())));
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Story;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )))
    }

    fn drain(rx: &mpsc::Receiver<Action>) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    #[test]
    fn test_raw_key_event_is_consumed() {
        let (tx, _rx) = mpsc::channel();
        let mut middleware = KeyboardMiddleware::new();
        let passed = middleware.handle(
            &key(KeyCode::Char('j')),
            &AppState::new("react"),
            &Dispatcher::new(tx),
        );
        assert!(!passed);
    }

    #[test]
    fn test_typing_in_insert_mode_extends_the_term() {
        let (tx, rx) = mpsc::channel();
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::new("rea");
        state.search.mode = InputMode::Insert;

        middleware.handle(&key(KeyCode::Char('c')), &state, &Dispatcher::new(tx));
        let actions = drain(&rx);
        assert!(matches!(
            &actions[..],
            [Action::Search(SearchAction::InputChanged(term))] if term == "reac"
        ));
    }

    #[test]
    fn test_enter_submits_and_leaves_insert_mode() {
        let (tx, rx) = mpsc::channel();
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::new("react");
        state.search.mode = InputMode::Insert;

        middleware.handle(&key(KeyCode::Enter), &state, &Dispatcher::new(tx));
        let actions = drain(&rx);
        assert!(matches!(
            &actions[..],
            [
                Action::Search(SearchAction::LeaveInput),
                Action::Search(SearchAction::Submit)
            ]
        ));
    }

    #[test]
    fn test_load_more_is_suppressed_while_loading() {
        let (tx, rx) = mpsc::channel();
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::new("react");
        state.stories.is_loading = true;

        middleware.handle(&key(KeyCode::Char('m')), &state, &Dispatcher::new(tx));
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_remove_resolves_cursor_through_sorted_view() {
        let (tx, rx) = mpsc::channel();
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::new("react");
        state.stories.data = vec![
            Story {
                object_id: "low".to_string(),
                title: String::new(),
                url: String::new(),
                author: String::new(),
                num_comments: 0,
                points: 1,
            },
            Story {
                object_id: "high".to_string(),
                title: String::new(),
                url: String::new(),
                author: String::new(),
                num_comments: 0,
                points: 9,
            },
        ];
        state.search.sort = state.search.sort.toggled(SortKey::Point);
        state.stories.selected = 0;

        // Cursor row 0 under Point sort is the high-points story
        middleware.handle(&key(KeyCode::Char('d')), &state, &Dispatcher::new(tx));
        let actions = drain(&rx);
        assert!(matches!(
            &actions[..],
            [Action::Stories(StoriesAction::Remove { object_id })] if object_id == "high"
        ));
    }
}
