// ABOUTME: Configuration options for board scraping, ScrapeOptions and ScrapeOptionsBuilder.
// ABOUTME: ScrapeOptionsBuilder provides a fluent API for overriding timeouts, limits and pacing.

use std::ops::Range;
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::site::SiteDescriptor;

/// Configuration options for a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// How long to wait for next-page links and description elements.
    pub wait_timeout: Duration,
    /// Overrides the board's page-turn ceiling.
    pub max_page_turns: Option<usize>,
    /// Overrides the board's delay range, in milliseconds.
    pub delay_override: Option<Range<u64>>,
    /// Overrides the collection date stamped on records.
    pub pull_date: Option<NaiveDate>,
    pub headless: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            wait_timeout: Duration::from_secs(3),
            max_page_turns: None,
            delay_override: None,
            pull_date: None,
            headless: false,
        }
    }
}

impl ScrapeOptions {
    /// Create a new ScrapeOptionsBuilder.
    pub fn builder() -> ScrapeOptionsBuilder {
        ScrapeOptionsBuilder::new()
    }

    pub fn page_turn_limit(&self, site: &SiteDescriptor) -> usize {
        self.max_page_turns.unwrap_or(site.max_page_turns)
    }

    pub fn delay_range(&self, site: &SiteDescriptor) -> Range<u64> {
        self.delay_override.clone().unwrap_or_else(|| site.delay_ms.clone())
    }

    /// The configured pull date, or today's local date.
    pub fn pull_date_or_today(&self) -> NaiveDate {
        self.pull_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Builder for constructing ScrapeOptions.
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptionsBuilder {
    opts: ScrapeOptions,
}

impl ScrapeOptionsBuilder {
    /// Create a new ScrapeOptionsBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: ScrapeOptions::default(),
        }
    }

    /// Set the element wait timeout.
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.opts.wait_timeout = timeout;
        self
    }

    /// Cap the number of next-page clicks per listing query.
    pub fn max_page_turns(mut self, turns: usize) -> Self {
        self.opts.max_page_turns = Some(turns);
        self
    }

    /// Replace the board's request delay range (milliseconds). `0..0` disables pauses.
    pub fn delay_ms(mut self, range: Range<u64>) -> Self {
        self.opts.delay_override = Some(range);
        self
    }

    /// Stamp records with a fixed pull date.
    pub fn pull_date(mut self, date: NaiveDate) -> Self {
        self.opts.pull_date = Some(date);
        self
    }

    /// Run Chrome without a window.
    pub fn headless(mut self, headless: bool) -> Self {
        self.opts.headless = headless;
        self
    }

    /// Build the ScrapeOptions.
    pub fn build(self) -> ScrapeOptions {
        self.opts
    }
}
