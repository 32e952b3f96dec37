// ABOUTME: Scripted in-memory Browser used by the scraper integration tests.
// ABOUTME: Serves canned listing pages and detail pages, and records navigation and clicks.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use anyhow::{anyhow, bail};
use chrono::NaiveDate;
use jobboard_scraper::{Browser, ElementHandle, Locator, Lookup, ScrapeOptions};

#[derive(Debug, Clone)]
struct Detail {
    html: String,
    description: Option<String>,
}

#[derive(Debug, Clone)]
enum Current {
    Blank,
    Listing { url: String, page: usize },
    Detail(String),
}

/// Listing URLs map to a sequence of result pages reached by clicking
/// "next"; detail URLs map to a page and an optional description element.
#[derive(Debug)]
pub struct FakeBrowser {
    listings: HashMap<String, Vec<String>>,
    endless: HashSet<String>,
    details: HashMap<String, Detail>,
    failing: HashSet<String>,
    current: Current,
    pub visited: Vec<String>,
    pub waits: Vec<Locator>,
    pub clicks: usize,
    pub closed: bool,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self {
            listings: HashMap::new(),
            endless: HashSet::new(),
            details: HashMap::new(),
            failing: HashSet::new(),
            current: Current::Blank,
            visited: Vec::new(),
            waits: Vec::new(),
            clicks: 0,
            closed: false,
        }
    }

    pub fn listing(mut self, url: &str, pages: Vec<String>) -> Self {
        self.listings.insert(url.to_string(), pages);
        self
    }

    /// A listing whose single page always offers another next-page link.
    pub fn endless_listing(mut self, url: &str, page: String) -> Self {
        self.endless.insert(url.to_string());
        self.listing(url, vec![page])
    }

    pub fn detail(mut self, url: &str, html: &str, description: Option<&str>) -> Self {
        self.details.insert(
            url.to_string(),
            Detail {
                html: html.to_string(),
                description: description.map(str::to_string),
            },
        );
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    fn current_detail(&self) -> Option<&Detail> {
        match &self.current {
            Current::Detail(url) => self.details.get(url),
            _ => None,
        }
    }
}

impl Browser for FakeBrowser {
    fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        self.visited.push(url.to_string());
        if self.failing.contains(url) {
            bail!("net::ERR_CONNECTION_RESET at {url}");
        }
        self.current = if self.listings.contains_key(url) {
            Current::Listing {
                url: url.to_string(),
                page: 0,
            }
        } else if self.details.contains_key(url) {
            Current::Detail(url.to_string())
        } else {
            bail!("no page scripted for {url}");
        };
        Ok(())
    }

    fn page_source(&mut self) -> anyhow::Result<String> {
        match &self.current {
            Current::Listing { url, page } => {
                let pages = &self.listings[url];
                Ok(pages[(*page).min(pages.len() - 1)].clone())
            }
            Current::Detail(url) => Ok(self.details[url].html.clone()),
            Current::Blank => Err(anyhow!("nothing loaded")),
        }
    }

    fn wait_for(&mut self, locator: &Locator, _timeout: Duration) -> Lookup {
        self.waits.push(locator.clone());
        let found = match &self.current {
            Current::Listing { url, page } => {
                self.endless.contains(url) || page + 1 < self.listings[url].len()
            }
            Current::Detail(_) => self
                .current_detail()
                .is_some_and(|d| d.description.is_some()),
            Current::Blank => false,
        };
        if found {
            Lookup::Found(ElementHandle::new(locator.clone()))
        } else {
            Lookup::NotFound
        }
    }

    fn click(&mut self, _element: &ElementHandle) -> anyhow::Result<()> {
        match &mut self.current {
            Current::Listing { page, .. } => {
                *page += 1;
                self.clicks += 1;
                Ok(())
            }
            _ => Err(anyhow!("nothing to click")),
        }
    }

    fn inner_html(&mut self, _element: &ElementHandle) -> anyhow::Result<String> {
        self.current_detail()
            .and_then(|d| d.description.clone())
            .ok_or_else(|| anyhow!("no description element"))
    }

    fn close(&mut self) -> anyhow::Result<()> {
        self.closed = true;
        Ok(())
    }
}

pub fn pull_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

/// Options with no pauses, no waiting and a fixed pull date.
pub fn fast_options() -> ScrapeOptions {
    ScrapeOptions::builder()
        .delay_ms(0..0)
        .wait_timeout(Duration::ZERO)
        .pull_date(pull_date())
        .build()
}

/// One DataJobs result row.
pub fn datajobs_row(href: &str, title: &str, company: &str, location: &str, pay: &str) -> String {
    format!(
        "<div class=\"row\"><a href=\"{href}\"><strong>{title}</strong> – \
         <span class=\"co\">{company}</span></a>\n\
         </div>\n<div class=\"loc\">\n<em>\n<span class=\"l\">{location}</span>\n\
         &nbsp;•&nbsp;\n{pay}\n</em>\n</div>\n"
    )
}

/// One Indeed result card whose link is a click-tracking redirect for `jk`.
pub fn indeed_card(jk: &str, title: &str) -> String {
    format!(
        "<h2 class=\"jobTitle css-x\"><a id=\"job_{jk}\" href=\"/rc/clk?jk={jk}&amp;from=serp\">\
         <span title=\"{title}\" id=\"jobTitle-{jk}\">{title}</span></a></h2>\n"
    )
}

pub fn indeed_view_url(jk: &str) -> String {
    format!("https://www.indeed.com/viewjob?jk={jk}&from=serp")
}

/// An Indeed detail page with the given header fields.
pub fn indeed_detail(company: &str, pay: &str, location: &str) -> String {
    format!(
        "<script>window.x = 1;</script>\n\
         <div data-company-name=\"true\">\
         <span class=\"c\"><a href=\"/cmp\">{company}</a></span></div>\n\
         <div id=\"salaryInfoAndJobType\"><span class=\"p\">{pay}</span></div>\n\
         <div class=\"jobLocationText\"><div><span>{location}</span></div></div>\n"
    )
}
