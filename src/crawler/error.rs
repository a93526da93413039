//! Error types for the crawler module

use std::time::Duration;

use thiserror::Error;

/// Error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The browser could not be launched or a tab could not be opened
    #[error("Browser error: {0}")]
    Browser(String),

    /// Navigation to a page failed
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// The URL being loaded
        url: String,
        /// Error reported by the browser
        message: String,
    },

    /// An awaited element never became present
    #[error("Timed out after {timeout:?} waiting for element #{id}")]
    Timeout {
        /// Id of the awaited element
        id: String,
        /// How long we waited
        timeout: Duration,
    },

    /// The rendered markup could not be read from the page
    #[error("Failed to read page markup: {0}")]
    Markup(String),
}
