//! Search request URL construction and parsing
//!
//! The request log downstream stores full URLs, so the term must be
//! recoverable from any URL this module builds. Both directions go
//! through the `url` crate's query-pair codec, which percent-encodes
//! reserved characters; `extract_search_term(build_url(b, t, p)) == t`
//! holds for terms containing spaces, `&`, `=` and the like.

use url::Url;

/// Query parameter carrying the search term
pub const PARAM_QUERY: &str = "query";

/// Query parameter carrying the zero-based page index
pub const PARAM_PAGE: &str = "page";

/// Build the search request URL for a term and page.
///
/// The `search` path segment is appended to whatever path the base URL
/// carries, so a base of `https://hn.algolia.com/api/v1` yields
/// `https://hn.algolia.com/api/v1/search?query=...&page=N`.
pub fn build_url(base: &Url, term: &str, page: u32) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("search");
    }
    url.query_pairs_mut()
        .clear()
        .append_pair(PARAM_QUERY, term)
        .append_pair(PARAM_PAGE, &page.to_string());
    url
}

/// Recover the search term from a previously built request URL.
///
/// Unparseable URLs and URLs without a `query` parameter yield the empty
/// string; the request log only ever contains URLs from [`build_url`],
/// so this is a defensive fallback rather than an expected path.
pub fn extract_search_term(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == PARAM_QUERY)
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

/// Recover the page index from a previously built request URL.
pub fn extract_page(url: &str) -> u32 {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == PARAM_PAGE)
                .and_then(|(_, value)| value.parse().ok())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://hn.algolia.com/api/v1").unwrap()
    }

    #[test]
    fn test_build_url_shape() {
        let url = build_url(&base(), "react", 0);
        assert_eq!(
            url.as_str(),
            "https://hn.algolia.com/api/v1/search?query=react&page=0"
        );
    }

    #[test]
    fn test_build_url_with_trailing_slash_base() {
        let slashed = Url::parse("https://hn.algolia.com/api/v1/").unwrap();
        let url = build_url(&slashed, "react", 1);
        assert_eq!(
            url.as_str(),
            "https://hn.algolia.com/api/v1/search?query=react&page=1"
        );
    }

    #[test]
    fn test_term_round_trip() {
        for term in ["react", "java script", "a&b"] {
            for page in [0u32, 1, 5] {
                let url = build_url(&base(), term, page);
                assert_eq!(
                    extract_search_term(url.as_str()),
                    term,
                    "term {:?} page {} did not round-trip via {}",
                    term,
                    page,
                    url
                );
            }
        }
    }

    #[test]
    fn test_page_round_trip() {
        let url = build_url(&base(), "rust", 5);
        assert_eq!(extract_page(url.as_str()), 5);
    }

    #[test]
    fn test_extract_from_garbage_is_empty() {
        assert_eq!(extract_search_term("not a url"), "");
        assert_eq!(extract_search_term("https://example.com/search"), "");
        assert_eq!(extract_page("not a url"), 0);
    }
}
