//! Domain models
//!
//! Application-level types, kept separate from the wire DTOs in
//! `hn-client` so the rest of the app never deals with optional fields.

mod search_history;
mod sort;
mod story;

pub use search_history::{last_searches, MAX_RECENT_SEARCHES};
pub use sort::{sorted_view, SortKey, SortState};
pub use story::Story;
