// ABOUTME: Record types for scraped job listings and job descriptions.
// ABOUTME: Field order and names match the persisted CSV columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for `pull_date` in persisted datasets.
pub const PULL_DATE_FORMAT: &str = "%m/%d/%Y";

/// Column order of `<site>_job-meta.csv`.
pub const JOB_META_COLUMNS: [&str; 12] = [
    "url",
    "title",
    "company",
    "location",
    "salary_lower",
    "salary_upper",
    "job_category",
    "site",
    "job_id",
    "pull_date",
    "state",
    "clean_title",
];

/// Column order of `<site>_job-descriptions.csv`.
pub const JOB_DESCRIPTION_COLUMNS: [&str; 4] = ["job_id", "title", "company", "desc"];

/// One job posting as seen on a listing page, enriched and normalized later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMeta {
    pub url: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary_lower: Option<f64>,
    pub salary_upper: Option<f64>,
    pub job_category: String,
    pub site: String,
    pub job_id: u64,
    #[serde(with = "mdy_date")]
    pub pull_date: NaiveDate,
    pub state: Option<String>,
    pub clean_title: String,
}

impl JobMeta {
    /// Starts a record from listing-page fields. Ids, dates and derived fields come later.
    pub fn listing(
        url: impl Into<String>,
        title: impl Into<String>,
        job_category: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            company: None,
            location: None,
            salary_lower: None,
            salary_upper: None,
            job_category: job_category.into(),
            site: String::new(),
            job_id: 0,
            pull_date: NaiveDate::default(),
            state: None,
            clean_title: String::new(),
        }
    }

    /// Key that identifies a distinct posting across merge runs.
    pub fn posting_key(&self) -> PostingKey<'_> {
        PostingKey {
            url: &self.url,
            title: &self.title,
            company: self.company.as_deref(),
            location: self.location.as_deref(),
        }
    }

    /// Key used to drop repeats within one scrape, before ids are assigned.
    pub fn listing_key(&self) -> ListingKey<'_> {
        ListingKey {
            posting: self.posting_key(),
            salary_lower: self.salary_lower.map(f64::to_bits),
            salary_upper: self.salary_upper.map(f64::to_bits),
            job_category: &self.job_category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostingKey<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingKey<'a> {
    pub posting: PostingKey<'a>,
    pub salary_lower: Option<u64>,
    pub salary_upper: Option<u64>,
    pub job_category: &'a str,
}

/// Full description text scraped from a posting's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub job_id: u64,
    pub title: String,
    pub company: String,
    pub desc: String,
}

/// Turns an empty or whitespace-only scraped string into `None`.
pub fn non_empty(s: impl Into<String>) -> Option<String> {
    let s = s.into();
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

mod mdy_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::PULL_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(PULL_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, PULL_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
