// ABOUTME: Browser-driven scraping of job boards into normalized, merged datasets.
// ABOUTME: Exposes the Browser trait, the Chrome adapter, board definitions and the pipeline.

pub mod boards;
pub mod browser;
pub mod chrome;
pub mod error;
pub mod options;
pub mod pacing;
pub mod pipeline;
pub mod scraper;
pub mod site;

pub use boards::{Board, BoardKind, DataJobsBoard, IndeedBoard};
pub use browser::{Browser, ElementHandle, Locator, Lookup};
pub use chrome::ChromeBrowser;
pub use error::{ErrorCode, Result, ScrapeError};
pub use options::{ScrapeOptions, ScrapeOptionsBuilder};
pub use pacing::{NoDelay, Pacer, RandomDelay};
pub use pipeline::{run_board, RunReport};
pub use scraper::{BoardScraper, ScrapeCounts};
pub use site::{ListingQuery, SiteDescriptor, DEFAULT_MAX_PAGE_TURNS};
