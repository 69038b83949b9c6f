//! Search API data transfer objects
//!
//! These types mirror the JSON returned by the Algolia HN search
//! endpoint. They are intentionally lenient: the index contains plenty of
//! records with missing titles, urls or scores, and a single odd record
//! must not fail the whole page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single story hit from the search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDto {
    /// Stable unique identifier, also used as removal key downstream
    #[serde(rename = "objectID")]
    pub object_id: String,

    /// Story title (absent for some comment-type records)
    #[serde(default)]
    pub title: Option<String>,

    /// Link target
    #[serde(default)]
    pub url: Option<String>,

    /// Submitter's username
    #[serde(default)]
    pub author: Option<String>,

    /// Upvote count
    #[serde(default)]
    pub points: Option<u64>,

    /// Comment count
    #[serde(default)]
    pub num_comments: Option<u64>,

    /// Submission time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// The hits on this page
    pub hits: Vec<StoryDto>,

    /// Zero-based page index this response covers
    pub page: u32,

    /// Total number of matching records
    #[serde(default, rename = "nbHits")]
    pub nb_hits: u64,

    /// Total number of pages available
    #[serde(default, rename = "nbPages")]
    pub nb_pages: u32,

    /// Page size the server used
    #[serde(default, rename = "hitsPerPage")]
    pub hits_per_page: u32,

    /// The query string the server saw
    #[serde(default)]
    pub query: Option<String>,
}
