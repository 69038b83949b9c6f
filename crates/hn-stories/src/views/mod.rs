use crate::state::AppState;
use crate::view_models::CommentTally;
use ratatui::Frame;

pub mod main_view;

/// Render the application
pub fn render(state: &AppState, tally: &mut CommentTally, frame: &mut Frame) {
    main_view::render(state, tally, frame);
}
