//! Settings middleware - persists the search term
//!
//! Every change to the search input is written through to the settings
//! store, so the next session starts on the last term typed. Replaying
//! a recent search goes through `SearchAction::Repeat` and deliberately
//! does not pass through here.

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use hn_config::{SettingsStore, SEARCH_TERM_KEY};

pub struct SettingsMiddleware {
    settings: SettingsStore,
}

impl SettingsMiddleware {
    pub fn new(settings: SettingsStore) -> Self {
        Self { settings }
    }
}

impl Middleware for SettingsMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::Search(SearchAction::InputChanged(term)) = action {
            self.settings.set(SEARCH_TERM_KEY, term.clone());
        }
        // Always pass through; the reducer still updates the input
        true
    }
}
