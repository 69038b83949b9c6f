//! Direct HTTP implementation of [`SearchClient`]

use crate::client::{SearchClient, SearchError};
use crate::types::SearchPage;
use async_trait::async_trait;
use std::time::Duration;

/// Search client backed by a pooled `reqwest` client.
///
/// The request timeout is fixed at construction time; a timed-out
/// request surfaces as an ordinary [`SearchError::Request`].
pub struct AlgoliaClient {
    http: reqwest::Client,
}

impl AlgoliaClient {
    /// Create a client with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    async fn search(&self, url: &str) -> Result<SearchPage, SearchError> {
        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("search request failed with HTTP {}: {}", status, url);
            return Err(SearchError::Status(status.as_u16()));
        }

        let page = response.json::<SearchPage>().await?;
        log::debug!("received {} hits for page {}", page.hits.len(), page.page);
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = AlgoliaClient::new(Duration::from_secs(10));
        assert!(client.is_ok());
    }
}
