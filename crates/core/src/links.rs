// ABOUTME: Rewrites board-relative listing hrefs into canonical absolute job URLs.
// ABOUTME: Handles redirect-tracking and sponsored-listing prefixes; logs anything else.

use crate::html_utils::unescape_entities;

/// How a board's listing hrefs map onto absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRules {
    /// Scheme and host used for rebuilt links, without a trailing slash.
    pub origin: String,
    /// Prefix of click-tracking redirects, e.g. `/rc/clk?`.
    pub redirect_prefix: String,
    /// Path (with `?`) of the canonical job view that redirects are rebuilt onto.
    pub view_path: String,
    /// Prefix of sponsored listings, which only need the origin prepended.
    pub sponsored_prefix: String,
}

impl LinkRules {
    pub fn indeed() -> Self {
        Self {
            origin: "https://www.indeed.com".to_string(),
            redirect_prefix: "/rc/clk?".to_string(),
            view_path: "/viewjob?".to_string(),
            sponsored_prefix: "/pagead".to_string(),
        }
    }

    /// Normalizes one href; unrecognized shapes pass through unchanged.
    pub fn normalize(&self, link: &str) -> String {
        if let Some(query) = link.strip_prefix(self.redirect_prefix.as_str()) {
            return format!("{}{}{}", self.origin, self.view_path, unescape_entities(query));
        }
        if link.starts_with(self.sponsored_prefix.as_str()) {
            return format!("{}{}", self.origin, unescape_entities(link));
        }
        let head: String = link.chars().take(20).collect();
        tracing::warn!(link = %head, "unhandled link type");
        link.to_string()
    }

    pub fn normalize_all<S: AsRef<str>>(&self, links: &[S]) -> Vec<String> {
        links.iter().map(|l| self.normalize(l.as_ref())).collect()
    }
}
