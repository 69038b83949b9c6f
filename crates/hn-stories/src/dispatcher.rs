//! Dispatcher for middleware action dispatch
//!
//! Middleware that needs to emit follow-up actions (a translated key
//! press, a fetch settlement arriving from a spawned task) sends them
//! here. Dispatched actions re-enter the middleware chain from the
//! beginning, so every middleware can observe them before they reach
//! the reducers.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher over the channel feeding the background
    /// worker, so dispatched actions re-enter the chain
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
