use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard;
pub mod logging;
pub mod search_middleware;
pub mod settings_middleware;

pub use keyboard::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use search_middleware::SearchMiddleware;
pub use settings_middleware::SettingsMiddleware;

/// Middleware trait - intercepts actions before they reach the reducers
///
/// Middleware runs on the background thread, so it can perform blocking
/// operations (network requests, file I/O) without stalling the render
/// loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: the action to process
    /// - `state`: read-only snapshot of the application state
    /// - `dispatcher`: for actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the
    /// action.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
