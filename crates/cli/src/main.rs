// ABOUTME: CLI that scrapes DataJobs and/or Indeed with Chrome and merges results into CSV files.
// ABOUTME: Logs to <log-dir>/main.log and prints a one-line summary per board.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use jobboard_core::CsvStore;
use jobboard_scraper::{run_board, BoardKind, ChromeBrowser, RunReport, ScrapeOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BoardArg {
    Datajobs,
    Indeed,
    All,
}

impl BoardArg {
    fn kinds(self) -> Vec<BoardKind> {
        match self {
            BoardArg::Datajobs => vec![BoardKind::DataJobs],
            BoardArg::Indeed => vec![BoardKind::Indeed],
            BoardArg::All => BoardKind::ALL.to_vec(),
        }
    }
}

/// Scrape job boards and merge the results into per-site CSV datasets.
#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(about = "Scrape job boards into deduplicated CSV datasets", long_about = None)]
struct Args {
    /// Which board to scrape.
    #[arg(long, value_enum, default_value_t = BoardArg::All)]
    board: BoardArg,

    /// Directory holding <site>_job-meta.csv and <site>_job-descriptions.csv.
    #[arg(long, default_value = "DATA")]
    out_dir: PathBuf,

    /// Directory for main.log.
    #[arg(long, default_value = "LOGS")]
    log_dir: PathBuf,

    /// Run Chrome without a window.
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Seconds to wait for next-page links and description elements.
    #[arg(long, default_value_t = 3)]
    wait_secs: u64,

    /// Maximum next-page clicks per listing query (default: 200).
    #[arg(long)]
    max_pages: Option<usize>,
}

impl Args {
    fn scrape_options(&self) -> ScrapeOptions {
        let mut builder = ScrapeOptions::builder()
            .wait_timeout(Duration::from_secs(self.wait_secs))
            .headless(self.headless);
        if let Some(turns) = self.max_pages {
            builder = builder.max_page_turns(turns);
        }
        builder.build()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_dir)?;

    let opts = args.scrape_options();
    let store = CsvStore::new(&args.out_dir);
    tracing::info!(board = ?args.board, out_dir = %args.out_dir.display(), "run started");

    for kind in args.board.kinds() {
        let board = kind.board();
        let mut browser = ChromeBrowser::launch(opts.headless)?;
        let report = run_board(board.as_ref(), &mut browser, &opts, &store)
            .with_context(|| format!("scraping {kind} failed"))?;
        println!("{}", summary(&report));
    }
    Ok(())
}

fn init_logging(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let path = log_dir.join("main.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn summary(report: &RunReport) -> String {
    format!(
        concat!(
            "{}: {} listings ({} duplicates) from {} pages, {} descriptions ({} skipped); ",
            "stored {} listings, {} descriptions"
        ),
        report.site,
        report.scrape.listings - report.scrape.duplicate_listings,
        report.scrape.duplicate_listings,
        report.scrape.pages,
        report.scrape.descriptions,
        report.scrape.skipped_details,
        report.merge.total_listings,
        report.merge.total_descriptions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_to_every_board() {
        assert_eq!(BoardArg::All.kinds(), vec![BoardKind::DataJobs, BoardKind::Indeed]);
        assert_eq!(BoardArg::Indeed.kinds(), vec![BoardKind::Indeed]);
    }

    #[test]
    fn test_options_from_flags() {
        let args =
            Args::parse_from(["jobboard", "--wait-secs", "7", "--max-pages", "4", "--headless"]);
        let opts = args.scrape_options();
        assert_eq!(opts.wait_timeout, Duration::from_secs(7));
        assert_eq!(opts.max_page_turns, Some(4));
        assert!(opts.headless);
        assert_eq!(args.out_dir, PathBuf::from("DATA"));
        assert_eq!(args.board, BoardArg::All);
    }

    #[test]
    fn test_defaults_keep_board_ceiling() {
        let args = Args::parse_from(["jobboard", "--board", "datajobs"]);
        assert_eq!(args.scrape_options().max_page_turns, None);
        assert_eq!(args.board, BoardArg::Datajobs);
    }
}
