// ABOUTME: CSV persistence for per-site job datasets.
// ABOUTME: Loads prior datasets, writes merged results atomically, and wires in the merge step.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::merge::{merge_datasets, Dataset, MergeStats};
use crate::models::{
    non_empty, JobDescription, JobMeta, JOB_DESCRIPTION_COLUMNS, JOB_META_COLUMNS,
};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Two CSV files per site inside one output directory:
/// `<site>_job-meta.csv` and `<site>_job-descriptions.csv`.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn meta_path(&self, site: &str) -> PathBuf {
        self.dir.join(format!("{site}_job-meta.csv"))
    }

    pub fn descriptions_path(&self, site: &str) -> PathBuf {
        self.dir.join(format!("{site}_job-descriptions.csv"))
    }

    /// Loads the persisted dataset for `site`.
    ///
    /// Returns `Ok(None)` when there is no listing file yet (first run). A
    /// missing description file next to an existing listing file reads as
    /// no descriptions. Files that exist but do not parse are errors, as
    /// is a listing file that repeats a `job_id`.
    pub fn load(&self, site: &str) -> Result<Option<Dataset>> {
        let path = self.meta_path(site);
        let Some(meta) = read_rows::<JobMeta>(&path)? else {
            return Ok(None);
        };
        let mut ids = HashSet::with_capacity(meta.len());
        if let Some(dup) = meta.iter().find(|j| !ids.insert(j.job_id)) {
            return Err(StoreError::invalid(format_args!(
                "duplicate job_id {} in {}",
                dup.job_id,
                path.display()
            )));
        }
        let descriptions =
            read_rows::<JobDescription>(&self.descriptions_path(site))?.unwrap_or_default();
        Ok(Some(Dataset { meta, descriptions }))
    }

    /// Overwrites both files for `site` with `dataset`.
    ///
    /// Both files are written to temporaries first and renamed only once both
    /// succeed. Blank `company`, `location` and `state` values are stored as
    /// empty cells, so they load back as `None`.
    pub fn save(&self, site: &str, dataset: &Dataset) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        let meta: Vec<JobMeta> = dataset.meta.iter().map(blank_to_none).collect();
        let meta_path = self.meta_path(site);
        let descriptions_path = self.descriptions_path(site);

        let meta_tmp = write_temp(&meta_path, &JOB_META_COLUMNS, &meta)?;
        let descriptions_tmp = match write_temp(
            &descriptions_path,
            &JOB_DESCRIPTION_COLUMNS,
            &dataset.descriptions,
        ) {
            Ok(tmp) => tmp,
            Err(e) => {
                let _ = fs::remove_file(&meta_tmp);
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&meta_tmp, &meta_path) {
            let _ = fs::remove_file(&meta_tmp);
            let _ = fs::remove_file(&descriptions_tmp);
            return Err(StoreError::io(&meta_path, e));
        }
        fs::rename(&descriptions_tmp, &descriptions_path).map_err(|e| {
            let _ = fs::remove_file(&descriptions_tmp);
            StoreError::io(&descriptions_path, e)
        })
    }

    /// Merges `fresh` into whatever is stored for `site` and persists the result.
    pub fn merge_and_save(&self, site: &str, fresh: Dataset) -> Result<MergeStats> {
        let prior = self.load(site)?;
        let outcome = merge_datasets(prior, fresh);
        self.save(site, &outcome.dataset)?;
        tracing::info!(
            site,
            first_run = outcome.stats.first_run,
            listings = outcome.stats.total_listings,
            descriptions = outcome.stats.total_descriptions,
            duplicates = outcome.stats.duplicate_listings,
            orphans = outcome.stats.orphaned_descriptions,
            "dataset saved"
        );
        Ok(outcome.stats)
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    let mut reader = csv::Reader::from_reader(file);
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| StoreError::csv(path, e))?;
    Ok(Some(rows))
}

fn blank_to_none(job: &JobMeta) -> JobMeta {
    let blank = |v: &Option<String>| v.clone().and_then(non_empty);
    JobMeta {
        company: blank(&job.company),
        location: blank(&job.location),
        state: blank(&job.state),
        ..job.clone()
    }
}

// The header is written by hand so that empty datasets still get one.
// On failure the temporary is removed before the error is returned.
fn write_temp<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<PathBuf> {
    let tmp = path.with_extension("csv.tmp");
    match write_rows(&tmp, headers, rows) {
        Ok(()) => Ok(tmp),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(headers)
        .map_err(|e| StoreError::csv(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| StoreError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))
}
