//! # Mock Page for Testing
//!
//! Provides a `MockPage` that implements the `PageProvider` trait over
//! in-memory HTML. Clones share state, so a test can keep a handle while the
//! crawl owns the page, then inspect navigations and quits afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use scraper::{ElementRef, Html};

use crate::crawler::error::CrawlError;
use crate::crawler::session::PageProvider;

#[derive(Debug, Default)]
struct MockState {
    pages: HashMap<String, String>,
    navigation_errors: HashSet<String>,
    timeouts: HashSet<String>,
    current: Option<String>,
    navigations: Vec<String>,
    quits: usize,
}

/// A fake browser tab serving canned markup
#[derive(Debug, Clone, Default)]
pub struct MockPage {
    state: Arc<Mutex<MockState>>,
}

impl MockPage {
    /// Create a mock with no pages
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Serve `html` at `url`
    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.state().pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Fail navigation to `url`
    pub fn with_navigation_error(self, url: &str) -> Self {
        self.state().navigation_errors.insert(url.to_string());
        self
    }

    /// Never let any element appear on `url`
    pub fn with_timeout(self, url: &str) -> Self {
        self.state().timeouts.insert(url.to_string());
        self
    }

    /// Every URL navigated to, in order
    pub fn navigations(&self) -> Vec<String> {
        self.state().navigations.clone()
    }

    /// How many times `quit` was called
    pub fn quits(&self) -> usize {
        self.state().quits
    }
}

impl PageProvider for MockPage {
    fn navigate(&mut self, url: &str) -> Result<(), CrawlError> {
        let mut state = self.state();
        state.navigations.push(url.to_string());
        if state.navigation_errors.contains(url) {
            state.current = None;
            return Err(CrawlError::Navigation {
                url: url.to_string(),
                message: "net::ERR_CONNECTION_RESET".to_string(),
            });
        }
        state.current = Some(url.to_string());
        Ok(())
    }

    fn wait_for_element_id(&mut self, id: &str, timeout: Duration) -> Result<(), CrawlError> {
        let state = self.state();
        let timed_out = || CrawlError::Timeout {
            id: id.to_string(),
            timeout,
        };
        let url = state.current.as_deref().ok_or_else(timed_out)?;
        if state.timeouts.contains(url) {
            return Err(timed_out());
        }
        let html = Html::parse_document(state.pages.get(url).map_or("", String::as_str));
        let present = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().id() == Some(id));
        if present { Ok(()) } else { Err(timed_out()) }
    }

    fn current_markup(&mut self) -> Result<String, CrawlError> {
        let state = self.state();
        let url = state
            .current
            .as_deref()
            .ok_or_else(|| CrawlError::Markup("no page loaded".to_string()))?;
        Ok(state
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| "<html><body></body></html>".to_string()))
    }

    fn quit(&mut self) {
        self.state().quits += 1;
    }
}
