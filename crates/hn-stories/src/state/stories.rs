//! Story list state

use crate::domain_models::Story;

/// Fetched story data and fetch status
///
/// `is_loading` and `is_error` are mutually exclusive: a new fetch
/// clears the error flag, and a settlement clears the loading flag
/// before possibly setting the error flag.
#[derive(Debug, Clone, Default)]
pub struct StoriesState {
    /// Stories in fetch order, unique by `object_id`
    pub data: Vec<Story>,
    /// Page index of the most recently merged response
    pub page: u32,
    /// A fetch is in flight
    pub is_loading: bool,
    /// The most recently settled fetch failed and no newer fetch started
    pub is_error: bool,
    /// Sequence number of the latest issued fetch; settlements carrying
    /// any other number are stale and get discarded
    pub in_flight: Option<u64>,
    /// Bumped whenever `data` changes; identity token for memoized
    /// derived values
    pub revision: u64,
    /// Cursor into the displayed (sorted) list
    pub selected: usize,
}
