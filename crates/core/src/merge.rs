// ABOUTME: Merges a freshly scraped batch into a previously persisted dataset.
// ABOUTME: Offsets new job ids, dedups postings (prior wins), and drops orphaned descriptions.

use std::collections::HashSet;

use crate::models::{JobDescription, JobMeta};

/// Listings plus their descriptions for one site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub meta: Vec<JobMeta>,
    pub descriptions: Vec<JobDescription>,
}

impl Dataset {
    pub fn new(meta: Vec<JobMeta>, descriptions: Vec<JobDescription>) -> Self {
        Self { meta, descriptions }
    }

    pub fn max_job_id(&self) -> u64 {
        self.meta.iter().map(|j| j.job_id).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.meta.is_empty() && self.descriptions.is_empty()
    }
}

/// Counts describing what a merge kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub first_run: bool,
    pub id_offset: u64,
    pub fresh_listings: usize,
    pub duplicate_listings: usize,
    pub orphaned_descriptions: usize,
    pub total_listings: usize,
    pub total_descriptions: usize,
}

/// Result of [`merge_datasets`]: the dataset to persist and what happened.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub dataset: Dataset,
    pub stats: MergeStats,
}

/// Combines `fresh` with the `prior` dataset, if there is one.
///
/// With no prior dataset the fresh batch is returned untouched. Otherwise
/// every fresh `job_id` (listings and descriptions alike) is shifted past the
/// prior maximum, listings are deduplicated on url/title/company/location
/// keeping the first occurrence, and descriptions whose listing did not
/// survive are dropped. A re-scraped posting therefore keeps its original
/// description even if the text changed.
pub fn merge_datasets(prior: Option<Dataset>, fresh: Dataset) -> MergeOutcome {
    let fresh_listings = fresh.meta.len();

    let Some(prior) = prior else {
        let stats = MergeStats {
            first_run: true,
            fresh_listings,
            total_listings: fresh.meta.len(),
            total_descriptions: fresh.descriptions.len(),
            ..MergeStats::default()
        };
        return MergeOutcome { dataset: fresh, stats };
    };

    let offset = prior.max_job_id();
    let Dataset {
        meta: prior_meta,
        descriptions: prior_descriptions,
    } = prior;

    let shifted = fresh.meta.into_iter().map(|mut job| {
        job.job_id += offset;
        job
    });
    let candidates: Vec<JobMeta> = prior_meta.into_iter().chain(shifted).collect();
    let candidate_count = candidates.len();
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(candidate_count);
        candidates.iter().map(|job| seen.insert(job.posting_key())).collect()
    };
    let meta: Vec<JobMeta> = candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(job, first)| first.then_some(job))
        .collect();
    let duplicate_listings = candidate_count - meta.len();

    let kept_ids: HashSet<u64> = meta.iter().map(|j| j.job_id).collect();
    let description_count = prior_descriptions.len() + fresh.descriptions.len();
    let shifted = fresh.descriptions.into_iter().map(|mut d| {
        d.job_id += offset;
        d
    });
    let descriptions: Vec<JobDescription> = prior_descriptions
        .into_iter()
        .chain(shifted)
        .filter(|d| kept_ids.contains(&d.job_id))
        .collect();
    let orphaned_descriptions = description_count - descriptions.len();

    let stats = MergeStats {
        first_run: false,
        id_offset: offset,
        fresh_listings,
        duplicate_listings,
        orphaned_descriptions,
        total_listings: meta.len(),
        total_descriptions: descriptions.len(),
    };
    MergeOutcome {
        dataset: Dataset { meta, descriptions },
        stats,
    }
}
