//! Story list actions
//!
//! The fetch lifecycle variants carry the sequence number assigned at
//! issue time; the reducer uses it to discard settlements of fetches
//! that have since been superseded.

use crate::domain_models::Story;

/// Fetched story data and list cursor actions
#[derive(Debug, Clone)]
pub enum StoriesAction {
    /// A fetch was issued; `seq` is its issue-order sequence number
    FetchInit { seq: u64 },
    /// A fetch settled successfully. Page 0 replaces the story list,
    /// any later page appends to it.
    FetchSuccess {
        seq: u64,
        list: Vec<Story>,
        page: u32,
    },
    /// A fetch settled with an error
    FetchFailure { seq: u64 },
    /// Drop the story with the given id from the list
    Remove { object_id: String },
    /// Move the list cursor down (wraps)
    SelectNext,
    /// Move the list cursor up (wraps)
    SelectPrevious,
}
