// ABOUTME: Per-board site descriptors: origin, listing queries, locators and pacing bounds.
// ABOUTME: Replaces hard-coded site constants with a value passed to the scraper.

use std::ops::Range;

use jobboard_core::LinkRules;

use crate::browser::Locator;

/// Page turns after which listing traversal stops even if a next page exists.
pub const DEFAULT_MAX_PAGE_TURNS: usize = 200;

/// One paged listing search on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Path appended to the board origin.
    pub path: String,
    /// Value stored in `job_category` for every listing this query yields.
    pub category: String,
}

impl ListingQuery {
    pub fn new(path: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category: category.into(),
        }
    }

    /// A keyword search, `jobs?q=<title>&l=<location>`, categorised by the title.
    pub fn search(title: &str, location: &str) -> Self {
        let q = title.to_lowercase().replace(' ', "+");
        let l = location.replace(' ', "+");
        Self::new(format!("jobs?q={q}&l={l}"), title)
    }
}

/// Everything the scraper needs to know about one board.
#[derive(Debug, Clone)]
pub struct SiteDescriptor {
    /// Dataset name, used for file names.
    pub name: String,
    /// Base URL with a trailing slash; also stored in each record's `site`.
    pub origin: String,
    pub queries: Vec<ListingQuery>,
    pub next_page: Locator,
    pub description: Locator,
    pub links: Option<LinkRules>,
    pub max_page_turns: usize,
    /// Bounds of the randomized pause before each request, in milliseconds.
    pub delay_ms: Range<u64>,
}

impl SiteDescriptor {
    /// Absolute URL of a listing query.
    pub fn listing_url(&self, query: &ListingQuery) -> String {
        join_origin(&self.origin, &query.path)
    }
}

/// Joins an origin ending in `/` with a path that may start with one.
pub(crate) fn join_origin(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_path() {
        let q = ListingQuery::search("Data Scientist", "United States");
        assert_eq!(q.path, "jobs?q=data+scientist&l=United+States");
        assert_eq!(q.category, "Data Scientist");
    }

    #[test]
    fn test_join_origin_has_one_slash() {
        assert_eq!(
            join_origin("https://datajobs.com/", "/Data-Science-Jobs"),
            "https://datajobs.com/Data-Science-Jobs"
        );
        assert_eq!(
            join_origin("https://indeed.com/", "jobs?q=x"),
            "https://indeed.com/jobs?q=x"
        );
    }
}
