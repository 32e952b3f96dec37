// ABOUTME: The browser capability consumed by board scrapers.
// ABOUTME: Defines locators, element handles, lookup results and the Browser trait.

use std::fmt;
use std::time::Duration;

/// How to find an element on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    XPath(String),
    Id(String),
}

impl Locator {
    pub fn xpath(expr: impl Into<String>) -> Self {
        Locator::XPath(expr.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Locator::Id(id.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::XPath(expr) => write!(f, "xpath {}", expr),
            Locator::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// An element found by [`Browser::wait_for`].
///
/// Handles do not borrow the page; implementations resolve the locator
/// again when the handle is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle {
    locator: Locator,
}

impl ElementHandle {
    pub fn new(locator: Locator) -> Self {
        Self { locator }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }
}

/// Outcome of waiting for an element. `NotFound` covers timeouts and is
/// ordinary data, e.g. the last page of results has no next-page link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(ElementHandle),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// A single browser session driving one tab.
pub trait Browser {
    /// Loads `url` and blocks until navigation settles.
    fn navigate(&mut self, url: &str) -> anyhow::Result<()>;

    /// Returns the current page's HTML.
    fn page_source(&mut self) -> anyhow::Result<String>;

    /// Blocks until `locator` matches an element or `timeout` elapses.
    fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Lookup;

    /// Clicks `element` and blocks until any navigation it starts settles.
    fn click(&mut self, element: &ElementHandle) -> anyhow::Result<()>;

    fn inner_html(&mut self, element: &ElementHandle) -> anyhow::Result<String>;

    /// Ends the session. Further calls are unspecified.
    fn close(&mut self) -> anyhow::Result<()>;
}
