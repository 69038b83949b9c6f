//! Algolia Hacker News search API client
//!
//! This crate provides a trait-based client for the Algolia "HN Search"
//! REST API. The design keeps the wire types separate from application
//! domain models so the crate stays reusable:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           SearchClient trait         │
//! │  - search(url)                       │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//!          ┌─────────────────┐
//!          │  AlgoliaClient  │
//!          │  (reqwest)      │
//!          └─────────────────┘
//! ```
//!
//! Request URLs are built with [`query::build_url`] and carry the search
//! term and zero-based page index as query parameters. The term can be
//! recovered from any built URL via [`query::extract_search_term`].

pub mod algolia;
pub mod client;
pub mod query;
pub mod types;

pub use algolia::AlgoliaClient;
pub use client::{SearchClient, SearchError};
pub use query::{build_url, extract_search_term};
pub use types::{SearchPage, StoryDto};
