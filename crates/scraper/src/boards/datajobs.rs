// ABOUTME: DataJobs board: two category listings whose rows carry company, location and salary.
// ABOUTME: Detail pages contribute only the description text.

use once_cell::sync::Lazy;
use regex::Regex;

use jobboard_core::{non_empty, JobMeta};

use super::{field, Board};
use crate::browser::Locator;
use crate::site::{ListingQuery, SiteDescriptor, DEFAULT_MAX_PAGE_TURNS};

pub const ORIGIN: &str = "https://datajobs.com/";

// One listing row: href, title, company, location, salary lower, salary upper.
static LISTING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"<a href="(.*)"><strong>(.*)</strong> – <span [^>]*>(.*)</span></a>[\n\s]*</div>"#,
        r"[\n\s]*<div[^>]*>[\n\s]*<em>[\n\s]*<span[^>]*>(.*)</span>[\n\s]*[&nbsp;•]*[\n\s]*",
        r"\$*([\d,]*)[–\s]*\$*([\d,]*)[\n\s]*</em>",
    ))
    .unwrap()
});

pub struct DataJobsBoard {
    site: SiteDescriptor,
}

impl DataJobsBoard {
    pub fn new() -> Self {
        Self {
            site: SiteDescriptor {
                name: "DataJobs".to_string(),
                origin: ORIGIN.to_string(),
                queries: vec![
                    ListingQuery::new("/Data-Science-Jobs", "Data Science & Analytics"),
                    ListingQuery::new("/Data-Engineering-Jobs", "Data Engineering"),
                ],
                next_page: Locator::xpath("//a[contains(text(), 'NEXT PAGE')]"),
                description: Locator::xpath(
                    "//div[@id='job_description']//*[@class='jobpost-table-cell-2']",
                ),
                links: None,
                max_page_turns: DEFAULT_MAX_PAGE_TURNS,
                delay_ms: 0..500,
            },
        }
    }
}

impl Default for DataJobsBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for DataJobsBoard {
    fn descriptor(&self) -> &SiteDescriptor {
        &self.site
    }

    fn parse_listing(&self, html: &str, query: &ListingQuery) -> Vec<JobMeta> {
        LISTING_RE
            .captures_iter(html)
            .map(|caps| {
                let mut job =
                    JobMeta::listing(field(&caps, 1), field(&caps, 2), query.category.as_str());
                job.company = non_empty(field(&caps, 3));
                job.location = non_empty(field(&caps, 4));
                job.salary_lower = parse_amount(&field(&caps, 5));
                job.salary_upper = parse_amount(&field(&caps, 6));
                job
            })
            .collect()
    }
}

/// Parses a digit-group amount such as `120,000`; empty means absent.
fn parse_amount(raw: &str) -> Option<f64> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
