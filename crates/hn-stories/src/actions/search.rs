//! Search actions
//!
//! The `Submit` / `LoadMore` / `Repeat` intents are consumed by the
//! search middleware, which turns each into a `RequestIssued` log entry
//! plus a fetch; the remaining variants reduce directly into
//! `SearchState`.

use crate::domain_models::SortKey;

/// Search box, request log and sorting actions
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// The search input content changed
    InputChanged(String),
    /// Run the current input as a fresh page-0 search
    Submit,
    /// Fetch the next page for the most recently requested term
    LoadMore,
    /// Re-run a previous search term as a fresh page-0 search.
    /// Deliberately leaves the input box and persisted term untouched.
    Repeat(String),
    /// A request URL was appended to the request log
    RequestIssued(String),
    /// A sort key was activated; activating the active key again
    /// reverses the ordering
    ToggleSort(SortKey),
    /// Focus the search input
    EnterInput,
    /// Leave the search input
    LeaveInput,
}
