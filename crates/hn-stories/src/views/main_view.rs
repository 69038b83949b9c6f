//! Main application view
//!
//! Renders the headline, search box, recent searches, story table and
//! status line. All text and colors come pre-computed from the view
//! model; this module only places widgets.

use crate::state::AppState;
use crate::view_models::{CommentTally, StoryListViewModel};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Row, Table},
    Frame,
};

pub fn render(state: &AppState, tally: &mut CommentTally, frame: &mut Frame) {
    let vm = StoryListViewModel::build(state, tally);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // headline
            Constraint::Length(1), // search box
            Constraint::Length(1), // recent searches
            Constraint::Min(1),    // story table
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    let headline = Paragraph::new(vm.headline.clone())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(headline, chunks[0]);

    frame.render_widget(Paragraph::new(vm.search_line.clone()), chunks[1]);
    frame.render_widget(Paragraph::new(vm.recent_line.clone()), chunks[2]);

    render_story_table(&vm, frame, chunks[3]);

    let mut status = vm.status_text.clone();
    if vm.show_load_more && !vm.rows.is_empty() {
        status.push_str("  |  m loads more");
    }
    let status_line = Paragraph::new(status).style(Style::default().fg(vm.status_color));
    frame.render_widget(status_line, chunks[4]);
}

fn render_story_table(
    vm: &StoryListViewModel,
    frame: &mut Frame,
    area: ratatui::layout::Rect,
) {
    let header = Row::new(vm.column_headers.to_vec())
        .style(Style::default().add_modifier(Modifier::UNDERLINED));

    let rows = vm.rows.iter().enumerate().map(|(index, row)| {
        let style = if index == vm.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Row::new(vec![
            row.title.clone(),
            row.author.clone(),
            row.comments.clone(),
            row.points.clone(),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(55),
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default());

    frame.render_widget(table, area);
}
