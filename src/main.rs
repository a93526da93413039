//! # manual-crawler CLI
//!
//! Crawls a small sample of chapters from the policy manual and writes them
//! as one timestamped JSON dataset. Run without arguments it fetches two
//! chapters into the working directory.
//!
//! ## Features
//!
//! - Configurable chapter limit, output directory and wait bound
//! - Headed mode and explicit Chrome binary for local debugging
//! - Optional plain-text log file next to the stderr logs

mod telemetry;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use manual_crawler::crawler::{self, CrawlerConfig, DEFAULT_ENTRY_URL};
use tracing::{info, instrument};

#[derive(Parser, Debug)]
#[command(author, version, about = "Crawl policy manual chapters into a JSON dataset", long_about = None)]
struct Cli {
    /// Maximum number of chapters to crawl
    #[arg(short = 'n', long, default_value = "2")]
    limit: usize,

    /// Directory the dataset file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Table-of-contents page to start from
    #[arg(long, default_value = DEFAULT_ENTRY_URL)]
    entry_url: String,

    /// Seconds to wait for a chapter's content to appear
    #[arg(long, default_value = "10")]
    wait_timeout: u64,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Chrome binary to launch
    #[arg(long, env = "CHROME_PATH")]
    chrome_path: Option<PathBuf>,

    /// Keep navigation and boilerplate lines in chapter text
    #[arg(long)]
    no_filter_ui: bool,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = telemetry::init_tracing_subscriber(cli.log_file.as_deref())?;

    crawl_command(cli).await
}

#[instrument]
async fn crawl_command(cli: Cli) -> anyhow::Result<()> {
    let config = CrawlerConfig::builder()
        .entry_url(cli.entry_url)
        .wait_timeout(Duration::from_secs(cli.wait_timeout))
        .filter_ui(!cli.no_filter_ui)
        .headless(!cli.headed)
        .chrome_path(cli.chrome_path)
        .build();
    let limit = cli.limit;

    info!("Crawling up to {} chapters", limit);

    // headless_chrome blocks, so the crawl runs on the blocking pool
    let dataset =
        tokio::task::spawn_blocking(move || crawler::crawl_website(&config, limit)).await??;

    let path = crawler::storage::write_dataset(&cli.output_dir, &dataset).await?;
    println!("Saved {} records to {}", dataset.data.len(), path.display());

    Ok(())
}
