//! View model for the story list screen
//!
//! Pre-computes all display text and colors from the application state.
//! The comment tally is memoized against the story list's revision
//! counter, so scrolling and redraws don't re-sum an unchanged list.

use crate::domain_models::{last_searches, sorted_view, SortKey, SortState, Story};
use crate::state::{AppState, InputMode, StoriesState};
use ratatui::style::Color;

/// Sum of comment counts over the stories
pub fn sum_comments(data: &[Story]) -> u64 {
    data.iter().map(|story| story.num_comments).sum()
}

/// Memoized comment tally, keyed on the story list revision
#[derive(Debug, Default)]
pub struct CommentTally {
    cached: Option<(u64, u64)>,
}

impl CommentTally {
    /// Current tally, recomputed only when the data changed
    pub fn sum(&mut self, stories: &StoriesState) -> u64 {
        match self.cached {
            Some((revision, sum)) if revision == stories.revision => sum,
            _ => {
                let sum = sum_comments(&stories.data);
                self.cached = Some((stories.revision, sum));
                sum
            }
        }
    }
}

/// One display-ready story row
#[derive(Debug, Clone)]
pub struct StoryRowViewModel {
    pub title: String,
    pub author: String,
    pub comments: String,
    pub points: String,
}

impl StoryRowViewModel {
    fn from_story(story: &Story) -> Self {
        Self {
            title: story.title.clone(),
            author: story.author.clone(),
            comments: story.num_comments.to_string(),
            points: story.points.to_string(),
        }
    }
}

/// Display model for the whole screen
#[derive(Debug, Clone)]
pub struct StoryListViewModel {
    /// "My Hacker Stories with N comments."
    pub headline: String,
    /// Search box line with mode hint
    pub search_line: String,
    /// Recent searches, already numbered; empty when there are none
    pub recent_line: String,
    /// Column headers with the sort indicator applied
    pub column_headers: [String; 4],
    /// Rows in display order
    pub rows: Vec<StoryRowViewModel>,
    /// Cursor row index into `rows`
    pub selected: usize,
    pub status_text: String,
    pub status_color: Color,
    /// The load-more affordance is hidden while a fetch is in flight
    pub show_load_more: bool,
}

impl StoryListViewModel {
    /// Transform state into a display-ready view model
    pub fn build(state: &AppState, tally: &mut CommentTally) -> Self {
        let sum = tally.sum(&state.stories);
        let sort = state.search.sort;

        let order = sorted_view(&state.stories.data, sort.key, sort.reversed);
        let rows = order.iter().map(StoryRowViewModel::from_story).collect();

        let (status_text, status_color) = Self::status(&state.stories);

        Self {
            headline: format!("My Hacker Stories with {} comments.", sum),
            search_line: Self::search_line(state),
            recent_line: Self::recent_line(&state.search.request_log),
            column_headers: [
                Self::header("Title", SortKey::Title, sort),
                Self::header("Author", SortKey::Author, sort),
                "Comments".to_string(),
                Self::header("Points", SortKey::Point, sort),
            ],
            rows,
            selected: state.stories.selected,
            status_text,
            status_color,
            show_load_more: !state.stories.is_loading,
        }
    }

    fn search_line(state: &AppState) -> String {
        match state.search.mode {
            InputMode::Insert => format!("Search: {}_  [Enter runs, Esc cancels]", state.search.term),
            InputMode::Normal => format!("Search: {}  [press i to edit]", state.search.term),
        }
    }

    fn recent_line(request_log: &[String]) -> String {
        let recent = last_searches(request_log);
        if recent.is_empty() {
            return String::new();
        }
        let entries: Vec<String> = recent
            .iter()
            .enumerate()
            .map(|(i, term)| format!("[{}] {}", i + 1, term))
            .collect();
        format!("Recent: {}", entries.join("  "))
    }

    fn header(label: &str, key: SortKey, sort: SortState) -> String {
        if sort.key == key {
            format!("{} {}", label, if sort.reversed { "v" } else { "^" })
        } else {
            label.to_string()
        }
    }

    fn status(stories: &StoriesState) -> (String, Color) {
        if stories.is_loading {
            ("Loading...".to_string(), Color::Yellow)
        } else if stories.is_error {
            ("Something went wrong ...".to_string(), Color::Red)
        } else {
            (
                format!(
                    "{} stories  |  j/k move  d drop  m more  t/a/p/o sort  1-5 recent  q quit",
                    stories.data.len()
                ),
                Color::DarkGray,
            )
        }
    }

}
