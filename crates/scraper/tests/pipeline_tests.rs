// ABOUTME: Integration tests for run_board: scrape, clean and merge into a CSV store.
// ABOUTME: Runs the DataJobs board twice against a scripted browser and a temporary directory.

mod common;

use common::*;
use jobboard_core::CsvStore;
use jobboard_scraper::{run_board, DataJobsBoard};
use tempfile::TempDir;

const DS: &str = "https://datajobs.com/Data-Science-Jobs";
const DE: &str = "https://datajobs.com/Data-Engineering-Jobs";

fn scripted_browser() -> FakeBrowser {
    FakeBrowser::new()
        .listing(
            DS,
            vec![
                datajobs_row(
                    "/a",
                    "Sr. Data Scientist",
                    "Acme &amp; Co",
                    "New York City",
                    "$150,000 – $180,000",
                ) + &datajobs_row("/b", "Head of Analytics", "Beta", "Seattle, WA", ""),
            ],
        )
        .listing(DE, vec![String::new()])
        .detail("https://datajobs.com/a", "", Some("<p>Models &amp; more</p>"))
        .detail("https://datajobs.com/b", "", Some("<p>Lead</p>"))
}

mod run_board_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_run_writes_cleaned_dataset() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        let board = DataJobsBoard::new();
        let mut browser = scripted_browser();

        let report = run_board(&board, &mut browser, &fast_options(), &store).unwrap();

        assert!(browser.closed);
        assert_eq!(report.site, "DataJobs");
        assert!(report.merge.first_run);
        assert_eq!(report.scrape.listings, 2);
        assert_eq!(report.scrape.descriptions, 2);

        let stored = store.load("DataJobs").unwrap().unwrap();
        let a = &stored.meta[0];
        assert_eq!(a.company.as_deref(), Some("Acme & Co"));
        assert_eq!(a.location.as_deref(), Some("New York City, NY"));
        assert_eq!(a.state.as_deref(), Some("NY"));
        assert_eq!(a.clean_title, "Data Scientist");
        assert_eq!(stored.meta[1].clean_title, "Leadership");
        assert_eq!(stored.meta[1].state.as_deref(), Some("WA"));
        assert_eq!(stored.descriptions.len(), 2);
    }

    #[test]
    fn rerun_collapses_onto_stored_postings() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path());
        let board = DataJobsBoard::new();
        let opts = fast_options();
        run_board(&board, &mut scripted_browser(), &opts, &store).unwrap();
        let before = store.load("DataJobs").unwrap().unwrap();

        let report = run_board(&board, &mut scripted_browser(), &opts, &store).unwrap();

        assert!(!report.merge.first_run);
        assert_eq!(report.merge.id_offset, 2);
        assert_eq!(report.merge.duplicate_listings, 2);
        assert_eq!(report.merge.orphaned_descriptions, 2);
        assert_eq!(store.load("DataJobs").unwrap().unwrap(), before);
    }
}
