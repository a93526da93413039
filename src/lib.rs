//! # manual-crawler - Policy Manual Chapter Crawler
//!
//! This crate crawls a hierarchical online policy manual (volumes, parts and
//! chapters) with a headless browser and turns each chapter page into a
//! structured record suitable for downstream indexing.
//!
//! ## Features
//!
//! - Table-of-contents discovery with in-scope link filtering
//! - Rendered-page extraction with a bounded wait for the content region
//! - Text normalization that strips navigation and boilerplate lines
//! - Volume and part metadata derived from chapter URLs
//! - Versioned JSON dataset output
//! - Browser access behind a narrow trait, so the pipeline runs against fakes
//!
//! ## Example
//!
//! ```rust,no_run
//! use manual_crawler::crawler::{self, CrawlerConfig};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CrawlerConfig::default();
//!
//!     // The browser is blocking, keep it off the async workers
//!     let dataset = tokio::task::spawn_blocking(move || crawler::crawl_website(&config, 2))
//!         .await??;
//!
//!     let path = crawler::storage::write_dataset(Path::new("."), &dataset).await?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

pub mod crawler;
