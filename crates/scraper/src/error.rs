// ABOUTME: Error types for board scraping including ErrorCode enum and ScrapeError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

use jobboard_core::StoreError;

/// Error codes representing the failures that abort a board run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Launch,
    Navigate,
    Browser,
    Store,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Launch => "browser launch failed",
            ErrorCode::Navigate => "navigation failed",
            ErrorCode::Browser => "browser error",
            ErrorCode::Store => "dataset store error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for scrape operations.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "jobboard: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    fn with_code(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Launch error.
    pub fn launch(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self::with_code(ErrorCode::Launch, String::new(), op, source)
    }

    /// Create a Navigate error.
    pub fn navigate(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Navigate, url, op, source)
    }

    /// Create a Browser error.
    pub fn browser(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::with_code(ErrorCode::Browser, url, op, source)
    }

    /// Create a Store error; `url` carries the site name.
    pub fn store(site: impl Into<String>, op: impl Into<String>, source: StoreError) -> Self {
        Self::with_code(ErrorCode::Store, site, op, Some(anyhow::Error::new(source)))
    }

    /// Returns true if this is a Launch error.
    pub fn is_launch(&self) -> bool {
        self.code == ErrorCode::Launch
    }

    /// Returns true if this is a Navigate error.
    pub fn is_navigate(&self) -> bool {
        self.code == ErrorCode::Navigate
    }

    /// Returns true if this is a Browser error.
    pub fn is_browser(&self) -> bool {
        self.code == ErrorCode::Browser
    }

    /// Returns true if this is a Store error.
    pub fn is_store(&self) -> bool {
        self.code == ErrorCode::Store
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
