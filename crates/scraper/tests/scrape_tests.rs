// ABOUTME: Integration tests for BoardScraper against a scripted browser.
// ABOUTME: Covers pagination, the page-turn ceiling, skipped detail pages and Indeed enrichment.

mod common;

use std::cell::Cell;

use common::*;
use jobboard_scraper::{
    Board, BoardScraper, DataJobsBoard, IndeedBoard, Locator, Pacer, ScrapeOptions,
};

const DS: &str = "https://datajobs.com/Data-Science-Jobs";
const DE: &str = "https://datajobs.com/Data-Engineering-Jobs";

struct CountingPacer<'c>(&'c Cell<usize>);

impl Pacer for CountingPacer<'_> {
    fn pause(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn acme_row() -> String {
    datajobs_row("/a", "Data Scientist", "Acme", "Austin, TX", "$100,000 – $120,000")
}

mod pagination_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn follows_next_page_until_not_found() {
        let board = DataJobsBoard::new();
        let mut browser = FakeBrowser::new()
            .listing(
                DS,
                vec![
                    acme_row() + &datajobs_row("/b", "ML Engineer", "Beta", "Remote", ""),
                    acme_row() + &datajobs_row("/c", "Analyst", "Gamma", "Boston, MA", "$90,000"),
                ],
            )
            .listing(DE, vec![datajobs_row("/d", "Data Engineer", "Delta", "Denver, CO", "")]);
        let opts = fast_options();
        let pauses = Cell::new(0);

        let (jobs, counts) = {
            let mut scraper =
                BoardScraper::new(&board, &mut browser, &opts).with_pacer(CountingPacer(&pauses));
            let jobs = scraper.scrape_listings().unwrap();
            (jobs, scraper.counts())
        };

        let urls: Vec<&str> = jobs.iter().map(|j| j.url.as_str()).collect();
        assert_eq!(urls, vec!["/a", "/b", "/c", "/d"]);
        let ids: Vec<u64> = jobs.iter().map(|j| j.job_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(jobs
            .iter()
            .all(|j| j.site == "https://datajobs.com/" && j.pull_date == pull_date()));
        assert_eq!(jobs[0].salary_lower, Some(100_000.0));
        assert_eq!(jobs[2].salary_upper, None);
        assert_eq!(jobs[3].job_category, "Data Engineering");

        assert_eq!(counts.pages, 3);
        assert_eq!(counts.listings, 5);
        assert_eq!(counts.duplicate_listings, 1);
        assert_eq!(browser.clicks, 1);
        assert_eq!(browser.visited, vec![DS.to_string(), DE.to_string()]);
        // two navigations and one click
        assert_eq!(pauses.get(), 3);
    }

    #[test]
    fn stops_at_page_turn_ceiling() {
        let board = DataJobsBoard::new();
        let row = datajobs_row("/a", "Data Scientist", "Acme", "Austin, TX", "");
        let mut browser = FakeBrowser::new()
            .endless_listing(DS, row.clone())
            .endless_listing(DE, row);
        let opts = ScrapeOptions {
            max_page_turns: Some(2),
            ..fast_options()
        };

        let (jobs, counts) = {
            let mut scraper = BoardScraper::new(&board, &mut browser, &opts);
            (scraper.scrape_listings().unwrap(), scraper.counts())
        };

        assert_eq!(counts.pages, 6);
        assert_eq!(browser.clicks, 4);
        // the same row under two categories is two listings
        assert_eq!(jobs.len(), 2);
        assert_eq!(counts.duplicate_listings, 4);
    }

    #[test]
    fn waits_for_the_board_next_page_link() {
        let board = DataJobsBoard::new();
        let mut browser = FakeBrowser::new()
            .listing(DS, vec![String::new()])
            .listing(DE, vec![String::new()]);
        let opts = fast_options();

        let jobs = BoardScraper::new(&board, &mut browser, &opts)
            .scrape_listings()
            .unwrap();

        assert!(jobs.is_empty());
        assert_eq!(browser.waits.len(), 2);
        assert_eq!(browser.waits[0], board.descriptor().next_page);
    }

    #[test]
    fn listing_navigation_failure_is_fatal() {
        let board = DataJobsBoard::new();
        let mut browser = FakeBrowser::new().failing(DS);
        let opts = fast_options();

        let err = BoardScraper::new(&board, &mut browser, &opts)
            .scrape_listings()
            .unwrap_err();

        assert!(err.is_navigate());
        assert_eq!(err.url, DS);
    }
}

mod detail_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_description_skips_only_that_record() {
        let board = DataJobsBoard::new();
        let page = datajobs_row("/a", "Data Scientist", "Acme", "Austin, TX", "")
            + &datajobs_row("/b", "Data Analyst", "Beta", "Remote", "")
            + &datajobs_row("/c", "Data Engineer", "Gamma", "Remote", "");
        let mut browser = FakeBrowser::new()
            .listing(DS, vec![page])
            .listing(DE, vec![String::new()])
            .detail("https://datajobs.com/a", "<html></html>", Some("<p>Build&nbsp;models</p>"))
            .detail("https://datajobs.com/b", "<html></html>", None)
            .failing("https://datajobs.com/c");
        let opts = fast_options();

        let (dataset, counts) = {
            let mut scraper = BoardScraper::new(&board, &mut browser, &opts);
            (scraper.run().unwrap(), scraper.counts())
        };

        assert_eq!(dataset.meta.len(), 3);
        assert_eq!(dataset.descriptions.len(), 1);
        let desc = &dataset.descriptions[0];
        assert_eq!(desc.job_id, 1);
        assert_eq!(desc.company, "Acme");
        assert_eq!(desc.desc.split_whitespace().collect::<Vec<_>>(), vec!["Build", "models"]);
        assert_eq!(counts.skipped_details, 2);
        assert_eq!(counts.descriptions, 1);
        assert_eq!(
            browser.waits.last(),
            Some(&Locator::xpath(
                "//div[@id='job_description']//*[@class='jobpost-table-cell-2']"
            ))
        );
    }

    #[test]
    fn indeed_detail_pages_correct_listing_fields() {
        let board = IndeedBoard::new();
        let site = board.descriptor().clone();
        let first =
            indeed_card("aaa", "Data Scientist") + &indeed_card("bbb", "Senior Data Scientist");
        let mut browser = FakeBrowser::new()
            .listing(&site.listing_url(&site.queries[0]), vec![first])
            .listing(&site.listing_url(&site.queries[1]), vec!["<html></html>".to_string()])
            .listing(&site.listing_url(&site.queries[2]), vec!["<html></html>".to_string()])
            .detail(
                &indeed_view_url("aaa"),
                &indeed_detail("Acme Corp", "$120,000 - $150,000 a year", "Austin, TX"),
                Some("<div>Do <b>science</b></div>"),
            )
            .detail(&indeed_view_url("bbb"), "<div>nothing here</div>", None);
        let opts = fast_options();

        let dataset = BoardScraper::new(&board, &mut browser, &opts).run().unwrap();

        let aaa = &dataset.meta[0];
        assert_eq!(aaa.url, indeed_view_url("aaa"));
        assert_eq!(aaa.company.as_deref(), Some("Acme Corp"));
        assert_eq!(aaa.location.as_deref(), Some("Austin, TX"));
        assert_eq!(aaa.salary_lower, Some(120_000.0));
        assert_eq!(aaa.salary_upper, Some(150_000.0));
        assert_eq!(aaa.job_category, "Data Scientist");
        assert_eq!(aaa.site, "https://indeed.com/");

        let bbb = &dataset.meta[1];
        assert_eq!(bbb.company, None);
        assert_eq!(bbb.location, None);

        assert_eq!(dataset.descriptions.len(), 1);
        assert_eq!(dataset.descriptions[0].company, "Acme Corp");
        assert_eq!(
            dataset.descriptions[0].desc.split_whitespace().collect::<Vec<_>>(),
            vec!["Do", "science"]
        );
    }
}
