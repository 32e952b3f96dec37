// ABOUTME: Runs one board end to end: scrape, clean, merge into the stored dataset.
// ABOUTME: Returns a RunReport summarising what was scraped and what the merge kept.

use jobboard_core::{clean_descriptions, clean_job_meta, CsvStore, MergeStats};

use crate::boards::Board;
use crate::browser::Browser;
use crate::error::{Result, ScrapeError};
use crate::options::ScrapeOptions;
use crate::scraper::{BoardScraper, ScrapeCounts};

/// Outcome of [`run_board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub site: String,
    pub scrape: ScrapeCounts,
    pub merge: MergeStats,
}

/// Scrapes `board` with `browser`, then cleans and merges the batch into `store`.
///
/// The browser is closed once scraping finishes, before the store is touched.
pub fn run_board(
    board: &dyn Board,
    browser: &mut dyn Browser,
    opts: &ScrapeOptions,
    store: &CsvStore,
) -> Result<RunReport> {
    let site = board.descriptor().name.clone();
    tracing::info!(%site, "scrape started");

    let (mut dataset, scrape) = {
        let mut scraper = BoardScraper::new(board, &mut *browser, opts);
        let dataset = scraper.run()?;
        (dataset, scraper.counts())
    };
    if let Err(e) = browser.close() {
        tracing::warn!(%site, error = %e, "browser did not close cleanly");
    }

    clean_job_meta(&mut dataset.meta);
    clean_descriptions(&mut dataset.descriptions);

    let merge = store
        .merge_and_save(&site, dataset)
        .map_err(|e| ScrapeError::store(&site, "merge dataset", e))?;

    Ok(RunReport { site, scrape, merge })
}
