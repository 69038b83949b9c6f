//! Recent-search derivation
//!
//! The request log is the source of truth: one URL per issued fetch,
//! including repeated pages of the same term. The recent-search row is
//! derived from it on demand, never stored.

use hn_client::extract_search_term;

/// Maximum number of prior search terms offered for replay
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Derive the recent distinct search terms from the request log.
///
/// Walks the URLs in order, keeping each term that differs from the
/// immediately preceding kept term - paging through one term collapses
/// to a single entry, while a term searched again after something else
/// shows up again. The newest kept term is the search currently on
/// screen, so it is dropped; at most [`MAX_RECENT_SEARCHES`] prior terms
/// remain.
pub fn last_searches(urls: &[String]) -> Vec<String> {
    let mut retained: Vec<String> = Vec::new();
    for url in urls {
        let term = extract_search_term(url);
        if retained.last() != Some(&term) {
            retained.push(term);
        }
    }

    let start = retained.len().saturating_sub(MAX_RECENT_SEARCHES + 1);
    let mut recent = retained.split_off(start);
    recent.pop();
    recent
}
