//! # Crawler Configuration Module
//!
//! This module provides configuration options for the manual crawler: where
//! the table of contents lives, which links are in scope, how chapter content
//! is located on the page, and how the browser session is launched. It uses a
//! builder pattern for flexible configuration.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: The main configuration struct with crawl parameters
//! - `CrawlerConfigBuilder`: Builder pattern implementation for easier configuration
//! - `SessionOptions`: Browser launch options for the page session
//! - `DatasetMetadata`: The descriptor written at the top of every dataset
//!
//! ## Defaults
//!
//! The defaults target the USCIS Policy Manual: the TOC page under
//! `https://www.uscis.gov/policy-manual/`, a `div.toc-tree` container, and
//! chapter bodies in `div#content`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default table-of-contents page
pub const DEFAULT_ENTRY_URL: &str = "https://www.uscis.gov/policy-manual/table-of-contents";

/// Default site origin that relative chapter links are resolved against
pub const DEFAULT_ORIGIN: &str = "https://www.uscis.gov";

/// Default in-scope path prefix for chapter links
pub const DEFAULT_PATH_PREFIX: &str = "/policy-manual/";

/// Browser launch options for a page session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Run Chrome without a visible window
    pub headless: bool,

    /// Explicit Chrome binary; `None` lets the launcher search the system
    pub chrome_path: Option<PathBuf>,

    /// How long the browser may sit idle before it is considered dead
    pub idle_timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_path: None,
            idle_timeout: Duration::from_secs(60),
        }
    }
}

/// Fixed descriptor for a dataset, set once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Dataset name, also used as the output file stem
    pub name: String,

    /// Dataset version
    pub version: String,

    /// Human readable description
    pub description: String,
}

impl Default for DatasetMetadata {
    fn default() -> Self {
        Self {
            name: "uscis_policy_manual".to_string(),
            version: "1.0.0".to_string(),
            description: "Scraped sample chapters from USCIS Policy Manual".to_string(),
        }
    }
}

/// Configuration for the crawler
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Table-of-contents page to start from
    pub entry_url: String,

    /// Origin that relative chapter hrefs are resolved against
    pub origin: String,

    /// Hrefs must start with this prefix to be crawled
    pub path_prefix: String,

    /// Tag name of the TOC container
    pub toc_tag: String,

    /// Class of the TOC container
    pub toc_class: String,

    /// Tag name of the chapter content element
    pub content_tag: String,

    /// Id of the chapter content element
    pub content_id: String,

    /// Upper bound on waiting for the content element to appear
    pub wait_timeout: Duration,

    /// Drop navigation and boilerplate lines from chapter text
    pub filter_ui: bool,

    /// Browser launch options
    pub session: SessionOptions,

    /// Descriptor written with the dataset
    pub dataset: DatasetMetadata,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            entry_url: DEFAULT_ENTRY_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            toc_tag: "div".to_string(),
            toc_class: "toc-tree".to_string(),
            content_tag: "div".to_string(),
            content_id: "content".to_string(),
            wait_timeout: Duration::from_secs(10),
            filter_ui: true,
            session: SessionOptions::default(),
            dataset: DatasetMetadata::default(),
        }
    }
}

/// Builder for CrawlerConfig
#[derive(Debug, Default)]
pub struct CrawlerConfigBuilder {
    config: CrawlerConfig,
}

impl CrawlerConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CrawlerConfig::default(),
        }
    }

    /// Set the table-of-contents page
    pub fn entry_url(mut self, entry_url: impl Into<String>) -> Self {
        self.config.entry_url = entry_url.into();
        self
    }

    /// Set the origin relative links are resolved against
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.config.origin = origin.into();
        self
    }

    /// Set the in-scope href prefix
    pub fn path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
        self.config.path_prefix = path_prefix.into();
        self
    }

    /// Set the tag and class of the TOC container
    pub fn toc_container(mut self, tag: impl Into<String>, class: impl Into<String>) -> Self {
        self.config.toc_tag = tag.into();
        self.config.toc_class = class.into();
        self
    }

    /// Set the tag and id of the chapter content element
    pub fn content_element(mut self, tag: impl Into<String>, id: impl Into<String>) -> Self {
        self.config.content_tag = tag.into();
        self.config.content_id = id.into();
        self
    }

    /// Set the bound on waiting for chapter content
    pub fn wait_timeout(mut self, wait_timeout: Duration) -> Self {
        self.config.wait_timeout = wait_timeout;
        self
    }

    /// Set whether UI chrome lines are filtered from chapter text
    pub fn filter_ui(mut self, filter_ui: bool) -> Self {
        self.config.filter_ui = filter_ui;
        self
    }

    /// Set whether the browser runs headless
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.session.headless = headless;
        self
    }

    /// Set an explicit Chrome binary
    pub fn chrome_path(mut self, chrome_path: Option<PathBuf>) -> Self {
        self.config.session.chrome_path = chrome_path;
        self
    }

    /// Set the dataset descriptor
    pub fn dataset(mut self, dataset: DatasetMetadata) -> Self {
        self.config.dataset = dataset;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CrawlerConfig {
        self.config
    }
}

impl CrawlerConfig {
    /// Create a new builder
    pub fn builder() -> CrawlerConfigBuilder {
        CrawlerConfigBuilder::new()
    }
}
