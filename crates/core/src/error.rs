// ABOUTME: Error types for dataset persistence operations.
// ABOUTME: Provides StoreError enum with Io, Csv, and Invalid variants.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or saving a dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a dataset file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file exists but its rows could not be (de)serialized.
    #[error("malformed csv in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The data was readable but violates a dataset invariant.
    #[error("invalid dataset: {0}")]
    Invalid(String),
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        StoreError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl fmt::Display) -> Self {
        StoreError::Invalid(msg.to_string())
    }
}
