// ABOUTME: Core normalization and persistence library for job-board scraping.
// ABOUTME: Provides record types, field normalizers, cleanup, merge, and CSV storage.

pub mod clean;
pub mod error;
pub mod html_utils;
pub mod links;
pub mod location;
pub mod merge;
pub mod models;
pub mod salary;
pub mod store;
pub mod title;

pub use clean::{clean_descriptions, clean_job_meta};
pub use error::StoreError;
pub use html_utils::{
    clean_html, remove_script_tags, remove_style_tags, strip_inert_blocks, unescape_entities,
};
pub use links::LinkRules;
pub use location::state_code;
pub use merge::{merge_datasets, Dataset, MergeOutcome, MergeStats};
pub use models::{non_empty, JobDescription, JobMeta, PULL_DATE_FORMAT};
pub use salary::{parse_pay, AnnualPay, Cadence, PayParse};
pub use store::CsvStore;
pub use title::{classify_title, clean_title, TitleCategory};
