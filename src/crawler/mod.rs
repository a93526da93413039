//! # Policy Manual Crawler Module
//!
//! This module crawls a hierarchical policy manual: it reads the table of
//! contents, loads each chapter page in a browser session, extracts the
//! chapter body as plain text and derives the chapter's volume and part from
//! its URL.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: Where the TOC lives and how chapter pages are read
//! - `crawl` / `crawl_website`: Drive discovery and extraction into records
//! - `PageProvider` / `Session`: The browser capability set and its scoped guard
//! - `Dataset`: The versioned envelope handed to `storage`
//!
//! ## Flow
//!
//! TOC discovery → per-link extraction and location parsing → `ChapterRecord`
//! → `Dataset`. Everything runs sequentially on one page session.

mod config;
mod content_extraction;
mod crawl;
mod document;
mod error;
mod location;
#[cfg(test)]
mod mock_page;
mod session;
pub mod storage;
mod toc;

pub use config::{
    CrawlerConfig, CrawlerConfigBuilder, DEFAULT_ENTRY_URL, DEFAULT_ORIGIN, DEFAULT_PATH_PREFIX,
    DatasetMetadata, SessionOptions,
};
pub use content_extraction::{clean_content, extract_chapter};
pub use crawl::{crawl, crawl_website};
pub use document::{Anchor, Document};
pub use error::CrawlError;
pub use location::{Location, parse_location};
pub use session::{ChromePage, PageProvider, Session};
pub use toc::discover_links;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chapter link found in the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocLink {
    /// Link text
    pub title: String,

    /// Absolute chapter URL
    pub url: String,
}

/// One crawled chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterRecord {
    /// Random identifier, for traceability only
    pub id: Uuid,

    /// Normalized chapter text; empty when extraction failed
    pub content: String,

    /// Where the chapter sits in the manual
    pub metadata: ChapterMetadata,
}

/// Location metadata for a chapter record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMetadata {
    /// Volume label derived from the URL
    pub volume: String,

    /// Chapter title as shown in the TOC
    pub chapter: String,

    /// Part label derived from the URL
    pub section: String,

    /// Absolute URL the content was read from
    pub reference_url: String,
}

/// A run's chapter records with their descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Name, version and description of the dataset
    pub metadata: DatasetMetadata,

    /// Records in discovery order
    pub data: Vec<ChapterRecord>,
}

impl Dataset {
    /// Wrap `data` with `metadata`
    pub fn new(metadata: DatasetMetadata, data: Vec<ChapterRecord>) -> Self {
        Self { metadata, data }
    }
}
