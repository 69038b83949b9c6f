//! Background worker thread that processes actions through middleware
//!
//! The main thread handles rendering and terminal input only; all
//! middleware work (network requests, settings writes) happens here.
//! Actions dispatched by middleware via the `Dispatcher` re-enter the
//! chain, so a fetch settlement flows through the same path as a user
//! intent before reaching the reducers on the main thread.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state: the main thread writes via the reducer, the worker
/// reads snapshots for middleware
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: actions from the main thread and from `Dispatcher` re-entry
/// - `action_tx`: used to build the `Dispatcher` handed to middleware
/// - `result_tx`: non-consumed actions, forwarded to the reducer loop
/// - `state`: shared state snapshots for middleware
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            result_tx.send(action).ok();
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        let mut should_forward = true;
        for mw in &mut middleware {
            if !mw.handle(&action, &current_state, &dispatcher) {
                should_forward = false;
                break;
            }
        }

        if should_forward && result_tx.send(action).is_err() {
            log::error!("Main thread gone, stopping background worker");
            break;
        }
    }

    log::info!("Background worker stopped");
}
