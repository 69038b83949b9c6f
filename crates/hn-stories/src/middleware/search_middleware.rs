//! Search middleware - turns search intents into network fetches
//!
//! Consumes `Submit` / `LoadMore` / `Repeat` and, for each, appends the
//! request URL to the log and issues exactly one fetch of that URL.
//! Every issue gets the next value of a monotonically increasing
//! sequence number; `FetchInit` is dispatched before the request task is
//! spawned, so the reducer records the latest sequence before any
//! settlement for it can arrive. In-flight requests are never cancelled,
//! their settlements are simply discarded by the reducer once a newer
//! fetch has been issued.

use crate::actions::{Action, SearchAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Story;
use crate::middleware::Middleware;
use crate::state::AppState;
use hn_client::{build_url, extract_search_term, AlgoliaClient, SearchClient};
use hn_config::AppConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use url::Url;

pub struct SearchMiddleware {
    /// Tokio runtime for the spawned request tasks
    runtime: Runtime,
    client: Arc<dyn SearchClient>,
    base_url: Url,
    /// Last issued fetch sequence number
    issue_seq: u64,
}

impl SearchMiddleware {
    pub fn new(config: &AppConfig) -> Self {
        let timeout = Duration::from_secs(config.fetch_timeout_secs);
        let client =
            AlgoliaClient::new(timeout).expect("Failed to build HTTP client");
        let base_url = Url::parse(&config.api_base_url).unwrap_or_else(|e| {
            log::warn!(
                "Invalid api_base_url {:?} ({}), falling back to default",
                config.api_base_url,
                e
            );
            Url::parse(&AppConfig::default().api_base_url).expect("default base URL is valid")
        });
        Self::with_client(Arc::new(client), base_url)
    }

    /// Construct over an arbitrary client; tests inject canned ones
    pub fn with_client(client: Arc<dyn SearchClient>, base_url: Url) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self {
            runtime,
            client,
            base_url,
            issue_seq: 0,
        }
    }

    /// Append the request URL to the log and issue one fetch of it
    fn issue(&mut self, term: &str, page: u32, dispatcher: &Dispatcher) {
        let url = build_url(&self.base_url, term, page);
        dispatcher.dispatch(Action::Search(SearchAction::RequestIssued(
            url.to_string(),
        )));

        self.issue_seq += 1;
        let seq = self.issue_seq;
        dispatcher.dispatch(Action::Stories(StoriesAction::FetchInit { seq }));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let url = url.to_string();
        self.runtime.spawn(async move {
            match client.search(&url).await {
                Ok(result) => {
                    let list: Vec<Story> = result.hits.into_iter().map(Story::from).collect();
                    dispatcher.dispatch(Action::Stories(StoriesAction::FetchSuccess {
                        seq,
                        list,
                        page: result.page,
                    }));
                }
                Err(e) => {
                    log::error!("fetch #{} failed: {}", seq, e);
                    dispatcher.dispatch(Action::Stories(StoriesAction::FetchFailure { seq }));
                }
            }
        });
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Search(SearchAction::Submit) => {
                let term = state.search.term.clone();
                self.issue(&term, 0, dispatcher);
                false
            }

            Action::Search(SearchAction::LoadMore) => {
                // Pagination continues the term of the last request, not
                // whatever is currently typed in the search box
                match state.search.request_log.last() {
                    Some(last_url) => {
                        let term = extract_search_term(last_url);
                        self.issue(&term, state.stories.page + 1, dispatcher);
                    }
                    None => {
                        log::warn!("load-more with an empty request log");
                    }
                }
                false
            }

            Action::Search(SearchAction::Repeat(term)) => {
                self.issue(term, 0, dispatcher);
                false
            }

            _ => true,
        }
    }
}
