//! Action logging middleware

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Logs every action flowing through the chain
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Raw key events are too chatty at debug level
        match action {
            Action::Global(GlobalAction::KeyPressed(_)) => {
                log::trace!("action: {:?}", action);
            }
            _ => {
                log::debug!("action: {:?}", action);
            }
        }
        true
    }
}
