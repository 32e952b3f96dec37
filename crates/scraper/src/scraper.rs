// ABOUTME: Drives a Browser through a board's listing pages and detail pages.
// ABOUTME: Paginates each listing query, dedups and numbers listings, then collects descriptions.

use std::collections::HashSet;

use jobboard_core::{clean_html, Dataset, JobDescription, JobMeta};

use crate::boards::Board;
use crate::browser::{Browser, Lookup};
use crate::error::{Result, ScrapeError};
use crate::options::ScrapeOptions;
use crate::pacing::{Pacer, RandomDelay};
use crate::site::ListingQuery;

/// Where listing traversal is within one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    Loaded,
    Extracted,
    Done,
}

/// Listing and detail counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeCounts {
    pub pages: usize,
    pub listings: usize,
    pub duplicate_listings: usize,
    pub descriptions: usize,
    pub skipped_details: usize,
}

pub struct BoardScraper<'a> {
    board: &'a dyn Board,
    browser: &'a mut dyn Browser,
    opts: &'a ScrapeOptions,
    pacer: Box<dyn Pacer + 'a>,
    counts: ScrapeCounts,
}

impl<'a> BoardScraper<'a> {
    pub fn new(
        board: &'a dyn Board,
        browser: &'a mut dyn Browser,
        opts: &'a ScrapeOptions,
    ) -> Self {
        let pacer = RandomDelay::new(opts.delay_range(board.descriptor()));
        Self {
            board,
            browser,
            opts,
            pacer: Box::new(pacer),
            counts: ScrapeCounts::default(),
        }
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'a) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn counts(&self) -> ScrapeCounts {
        self.counts
    }

    /// Scrapes listings, then descriptions, into one dataset.
    pub fn run(&mut self) -> Result<Dataset> {
        let mut meta = self.scrape_listings()?;
        let descriptions = self.scrape_descriptions(&mut meta);
        Ok(Dataset::new(meta, descriptions))
    }

    /// Walks every listing query of the board.
    ///
    /// The result is deduplicated, numbered `1..=n` in page order and
    /// stamped with the board origin and the pull date. A listing page that
    /// fails to load aborts the run.
    pub fn scrape_listings(&mut self) -> Result<Vec<JobMeta>> {
        let board = self.board;
        let site = board.descriptor();
        let mut batch = Vec::new();
        for query in &site.queries {
            let url = site.listing_url(query);
            self.pacer.pause();
            self.browser
                .navigate(&url)
                .map_err(|e| ScrapeError::navigate(&url, "load listing page", Some(e)))?;
            self.paginate(&url, query, &mut batch)?;
        }

        let mut jobs = dedup_listings(batch);
        self.counts.duplicate_listings = self.counts.listings - jobs.len();
        let pull_date = self.opts.pull_date_or_today();
        for (i, job) in jobs.iter_mut().enumerate() {
            job.job_id = i as u64 + 1;
            job.site = site.origin.clone();
            job.pull_date = pull_date;
        }
        tracing::info!(
            site = %site.name,
            pages = self.counts.pages,
            listings = jobs.len(),
            duplicates = self.counts.duplicate_listings,
            "listing traversal finished"
        );
        Ok(jobs)
    }

    fn paginate(
        &mut self,
        url: &str,
        query: &ListingQuery,
        batch: &mut Vec<JobMeta>,
    ) -> Result<()> {
        let board = self.board;
        let limit = self.opts.page_turn_limit(board.descriptor());
        let next = &board.descriptor().next_page;
        let mut turns = 0;
        let mut state = PageState::Loaded;
        while state != PageState::Done {
            state = match state {
                PageState::Loaded => {
                    let html = self
                        .browser
                        .page_source()
                        .map_err(|e| ScrapeError::browser(url, "read listing page", Some(e)))?;
                    let jobs = board.parse_listing(&html, query);
                    tracing::debug!(
                        url,
                        page = turns,
                        found = jobs.len(),
                        "listing page extracted"
                    );
                    self.counts.pages += 1;
                    self.counts.listings += jobs.len();
                    batch.extend(jobs);
                    PageState::Extracted
                }
                PageState::Extracted if turns >= limit => {
                    tracing::info!(url, turns, "page-turn ceiling reached");
                    PageState::Done
                }
                PageState::Extracted => match self.browser.wait_for(next, self.opts.wait_timeout) {
                    Lookup::Found(link) => {
                        self.pacer.pause();
                        match self.browser.click(&link) {
                            Ok(()) => {
                                turns += 1;
                                PageState::Loaded
                            }
                            Err(e) => {
                                tracing::warn!(url, error = %e, "next-page click failed");
                                PageState::Done
                            }
                        }
                    }
                    Lookup::NotFound => {
                        tracing::info!(url, turns, "end of search results");
                        PageState::Done
                    }
                },
                PageState::Done => PageState::Done,
            };
        }
        Ok(())
    }

    /// Visits each listing's detail page and collects its description.
    ///
    /// Boards that read the detail page may correct `jobs` in place. Any
    /// failure on a detail page skips that record only.
    pub fn scrape_descriptions(&mut self, jobs: &mut [JobMeta]) -> Vec<JobDescription> {
        let mut descriptions = Vec::with_capacity(jobs.len());
        for job in jobs.iter_mut() {
            match self.scrape_detail(job) {
                Some(desc) => descriptions.push(desc),
                None => self.counts.skipped_details += 1,
            }
        }
        self.counts.descriptions = descriptions.len();
        tracing::info!(
            site = %self.board.descriptor().name,
            descriptions = descriptions.len(),
            skipped = self.counts.skipped_details,
            "detail traversal finished"
        );
        descriptions
    }

    fn scrape_detail(&mut self, job: &mut JobMeta) -> Option<JobDescription> {
        let url = self.board.detail_url(job);
        self.pacer.pause();
        if let Err(e) = self.browser.navigate(&url) {
            tracing::warn!(job_id = job.job_id, %url, error = %e, "detail page failed to load");
            return None;
        }

        let html = if self.board.reads_detail_page() {
            match self.browser.page_source() {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(job_id = job.job_id, %url, error = %e, "detail page unreadable");
                    return None;
                }
            }
        } else {
            String::new()
        };
        let company = self.board.enrich(job, &html);

        let board = self.board;
        let locator = &board.descriptor().description;
        let element = match self.browser.wait_for(locator, self.opts.wait_timeout) {
            Lookup::Found(element) => element,
            Lookup::NotFound => {
                tracing::warn!(
                    job_id = job.job_id,
                    title = %job.title,
                    "job description not found"
                );
                return None;
            }
        };
        let inner = match self.browser.inner_html(&element) {
            Ok(inner) => inner,
            Err(e) => {
                tracing::warn!(job_id = job.job_id, error = %e, "job description unreadable");
                return None;
            }
        };

        Some(JobDescription {
            job_id: job.job_id,
            title: job.title.clone(),
            company,
            desc: clean_html(&inner),
        })
    }
}

/// Drops repeated listings, keeping the first occurrence.
fn dedup_listings(batch: Vec<JobMeta>) -> Vec<JobMeta> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(batch.len());
        batch.iter().map(|job| seen.insert(job.listing_key())).collect()
    };
    batch
        .into_iter()
        .zip(keep)
        .filter_map(|(job, first)| first.then_some(job))
        .collect()
}
