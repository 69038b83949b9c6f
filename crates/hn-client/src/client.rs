//! Search client trait and error type
//!
//! The trait is the seam between the application and the network: the
//! production implementation is [`crate::AlgoliaClient`], and tests
//! substitute canned implementations.

use crate::types::SearchPage;
use async_trait::async_trait;
use thiserror::Error;

/// Errors a search request can settle with.
///
/// Callers generally collapse all variants into a single "fetch failed"
/// condition; the variants exist for logging and tests, not for
/// differentiated user-facing handling.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure: connect error, timeout, or a response
    /// body that did not decode as a search page
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("search server returned HTTP {0}")]
    Status(u16),
}

impl SearchError {
    /// Whether this error was caused by the configured request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Request(e) if e.is_timeout())
    }
}

/// Search API client
///
/// Implementations take a fully built request URL (see
/// [`crate::query::build_url`]) and return one decoded result page.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; requests are issued from
/// spawned tasks that outlive the dispatching call.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Execute one search request against the given URL
    async fn search(&self, url: &str) -> Result<SearchPage, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedClient;

    #[async_trait]
    impl SearchClient for CannedClient {
        async fn search(&self, _url: &str) -> Result<SearchPage, SearchError> {
            Ok(SearchPage {
                hits: vec![],
                page: 3,
                nb_hits: 0,
                nb_pages: 0,
                hits_per_page: 20,
                query: None,
            })
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let client: Box<dyn SearchClient> = Box::new(CannedClient);
        let page = client.search("https://example.com/search").await.unwrap();
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_status_error_display() {
        let err = SearchError::Status(503);
        assert_eq!(err.to_string(), "search server returned HTTP 503");
        assert!(!err.is_timeout());
    }
}
