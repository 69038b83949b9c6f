//! View models
//!
//! Presentation logic lives here: state goes in, display-ready strings
//! and styles come out, so the views stay mechanical.

mod story_list;

pub use story_list::{sum_comments, CommentTally, StoryListViewModel, StoryRowViewModel};
