// ABOUTME: Board strategy trait and the registry of supported job boards.
// ABOUTME: Each board supplies its site descriptor, listing parser and detail-page handling.

pub mod datajobs;
pub mod indeed;

use std::fmt;

use jobboard_core::{unescape_entities, JobMeta};

use crate::site::{join_origin, ListingQuery, SiteDescriptor};

pub use datajobs::DataJobsBoard;
pub use indeed::IndeedBoard;

/// Board-specific knowledge used by [`crate::scraper::BoardScraper`].
pub trait Board {
    fn descriptor(&self) -> &SiteDescriptor;

    /// Extracts every listing on one results page.
    fn parse_listing(&self, html: &str, query: &ListingQuery) -> Vec<JobMeta>;

    /// URL of the posting's detail page.
    fn detail_url(&self, job: &JobMeta) -> String {
        join_origin(&self.descriptor().origin, &job.url)
    }

    /// Whether [`Board::enrich`] needs the detail page's HTML.
    fn reads_detail_page(&self) -> bool {
        false
    }

    /// Corrects `job` from its detail page and returns the company to
    /// record on the job's description.
    fn enrich(&self, job: &mut JobMeta, _detail_html: &str) -> String {
        job.company.clone().unwrap_or_default()
    }
}

/// The boards the CLI knows how to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardKind {
    DataJobs,
    Indeed,
}

impl BoardKind {
    pub const ALL: [BoardKind; 2] = [BoardKind::DataJobs, BoardKind::Indeed];

    pub fn board(self) -> Box<dyn Board> {
        match self {
            BoardKind::DataJobs => Box::new(DataJobsBoard::new()),
            BoardKind::Indeed => Box::new(IndeedBoard::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoardKind::DataJobs => "DataJobs",
            BoardKind::Indeed => "Indeed",
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capture `i` of a match, unescaped; empty when the group did not take part.
fn field(caps: &regex::Captures<'_>, i: usize) -> String {
    caps.get(i)
        .map(|m| unescape_entities(m.as_str()))
        .unwrap_or_default()
}
