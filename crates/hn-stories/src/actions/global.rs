//! Global application actions

use ratatui::crossterm::event::KeyEvent;

/// Actions that affect the whole application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key event from the terminal; translated to semantic actions
    /// by the keyboard middleware and never reaches a reducer
    KeyPressed(KeyEvent),
    /// Shut the application down
    Quit,
}
