// ABOUTME: Indeed board: keyword searches whose listings carry only title and link.
// ABOUTME: Detail pages supply company, location and pay, which overwrite the listing values.

use once_cell::sync::Lazy;
use regex::Regex;

use jobboard_core::{non_empty, parse_pay, strip_inert_blocks, JobMeta, LinkRules, PayParse};

use super::{field, Board};
use crate::browser::Locator;
use crate::site::{ListingQuery, SiteDescriptor, DEFAULT_MAX_PAGE_TURNS};

pub const ORIGIN: &str = "https://indeed.com/";

const SEARCH_TITLES: [&str; 3] = ["Data Scientist", "Data Analyst", "Data Engineer"];
const SEARCH_LOCATIONS: [&str; 1] = ["United States"];

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<span[^>]*jobTitle[^>]*>(.*?)<").unwrap());
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<h2[^>]*jobTitle[^>]*><a[^>]*href="([^">]*)">"#).unwrap());

static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"data-company-name[^>]*><span[^>]*><a[^>]*>([^<]*)<").unwrap()
});
static PAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"salaryInfoAndJobType[^>]*><span[^>]*>([^<]*)<").unwrap());
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"jobLocationText[^>]*><div[^>]*><span[^>]*>([^<]*)<").unwrap()
});
static LOCATION_FALLBACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"job-location[^>]*>([^<]*)</div").unwrap());

pub struct IndeedBoard {
    site: SiteDescriptor,
}

impl IndeedBoard {
    pub fn new() -> Self {
        let queries = SEARCH_LOCATIONS
            .iter()
            .flat_map(|loc| SEARCH_TITLES.iter().map(move |title| ListingQuery::search(title, loc)))
            .collect();
        Self {
            site: SiteDescriptor {
                name: "Indeed".to_string(),
                origin: ORIGIN.to_string(),
                queries,
                next_page: Locator::xpath("//a[contains(@data-testid, 'pagination-page-next')]"),
                description: Locator::id("jobDescriptionText"),
                links: Some(LinkRules::indeed()),
                max_page_turns: DEFAULT_MAX_PAGE_TURNS,
                delay_ms: 100..1400,
            },
        }
    }

    fn links(&self) -> LinkRules {
        self.site.links.clone().unwrap_or_else(LinkRules::indeed)
    }
}

impl Default for IndeedBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for IndeedBoard {
    fn descriptor(&self) -> &SiteDescriptor {
        &self.site
    }

    // Titles and links come from separate patterns; extra entries on either side are dropped.
    fn parse_listing(&self, html: &str, query: &ListingQuery) -> Vec<JobMeta> {
        let titles: Vec<String> = TITLE_RE.captures_iter(html).map(|c| field(&c, 1)).collect();
        let hrefs: Vec<&str> = LINK_RE
            .captures_iter(html)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        if titles.len() != hrefs.len() {
            tracing::debug!(
                titles = titles.len(),
                links = hrefs.len(),
                "title/link count mismatch"
            );
        }
        let links = self.links().normalize_all(&hrefs);

        links
            .into_iter()
            .zip(titles)
            .map(|(url, title)| JobMeta::listing(url, title, query.category.as_str()))
            .collect()
    }

    // Listing links are already absolute.
    fn detail_url(&self, job: &JobMeta) -> String {
        job.url.clone()
    }

    fn reads_detail_page(&self) -> bool {
        true
    }

    fn enrich(&self, job: &mut JobMeta, detail_html: &str) -> String {
        let html = strip_inert_blocks(detail_html);

        let companies = capture_all(&COMPANY_RE, &html);
        let company = match companies.as_slice() {
            [one] => {
                job.company = non_empty(one.as_str());
                one.clone()
            }
            found => {
                tracing::warn!(
                    job_id = job.job_id,
                    title = %job.title,
                    ?found,
                    "expected one company name"
                );
                String::new()
            }
        };

        let pays = capture_all(&PAY_RE, &html);
        match pays.as_slice() {
            [pay] => {
                if !pay.trim().is_empty() && pay.chars().any(|c| c.is_ascii_digit()) {
                    if let PayParse::Annual(annual) = parse_pay(pay) {
                        job.salary_lower = Some(annual.lower);
                        job.salary_upper = annual.upper;
                    }
                }
            }
            found => {
                tracing::warn!(
                    job_id = job.job_id,
                    title = %job.title,
                    ?found,
                    "expected one salary"
                );
            }
        }

        let mut locations = capture_all(&LOCATION_RE, &html);
        if locations.is_empty() {
            locations = capture_all(&LOCATION_FALLBACK_RE, &html);
        }
        match locations.as_slice() {
            [first] | [first, _] => job.location = non_empty(first.as_str()),
            found => {
                tracing::warn!(
                    job_id = job.job_id,
                    title = %job.title,
                    ?found,
                    "expected one location"
                );
            }
        }

        company
    }
}

fn capture_all(re: &Regex, html: &str) -> Vec<String> {
    re.captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
