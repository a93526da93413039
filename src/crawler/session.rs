//! # Page Session Module
//!
//! A page session is one navigable browser context, exclusively owned by the
//! crawl for its whole duration.
//!
//! ## Key Components
//!
//! - `PageProvider`: The capability set the crawler needs from a browser
//! - `Session`: Scoped guard that releases the provider exactly once
//! - `ChromePage`: `PageProvider` backed by a headless Chrome tab

use std::ffi::OsStr;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info, warn};

use crate::crawler::config::SessionOptions;
use crate::crawler::error::CrawlError;

/// A navigable page
pub trait PageProvider {
    /// Load `url` and wait for the navigation to settle
    fn navigate(&mut self, url: &str) -> Result<(), CrawlError>;

    /// Block until an element with `id` is present, for at most `timeout`
    fn wait_for_element_id(&mut self, id: &str, timeout: Duration) -> Result<(), CrawlError>;

    /// The currently rendered document
    fn current_markup(&mut self) -> Result<String, CrawlError>;

    /// Release the browser context
    fn quit(&mut self);
}

/// Scoped ownership of a `PageProvider`
///
/// `quit` is called exactly once, either by `release` or when the guard is
/// dropped on any other exit path.
pub struct Session<P: PageProvider> {
    provider: P,
    released: bool,
}

impl<P: PageProvider> Session<P> {
    /// Take ownership of an acquired provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            released: false,
        }
    }

    /// Release the provider now
    pub fn release(mut self) {
        self.quit_once();
    }

    fn quit_once(&mut self) {
        if !self.released {
            self.released = true;
            self.provider.quit();
            debug!("Page session released");
        }
    }
}

impl<P: PageProvider> Deref for Session<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.provider
    }
}

impl<P: PageProvider> DerefMut for Session<P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}

impl<P: PageProvider> Drop for Session<P> {
    fn drop(&mut self) {
        self.quit_once();
    }
}

/// A Chrome tab driven through the DevTools protocol
pub struct ChromePage {
    // Dropping the browser kills the Chrome process.
    browser: Option<Browser>,
    tab: Arc<Tab>,
}

impl ChromePage {
    /// Launch Chrome and open a tab
    ///
    /// Sandboxing and `/dev/shm` usage are disabled so the browser runs
    /// inside containers. There is no retry; a failure here ends the run.
    pub fn launch(options: &SessionOptions) -> Result<Self, CrawlError> {
        let args = vec![OsStr::new("--disable-dev-shm-usage")];

        let launch_options = LaunchOptions::default_builder()
            .headless(options.headless)
            .sandbox(false)
            .path(options.chrome_path.clone())
            .idle_browser_timeout(options.idle_timeout)
            .args(args)
            .build()
            .map_err(|e| CrawlError::Browser(format!("Invalid launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| CrawlError::Browser(format!("Failed to launch browser: {}", e)))?;
        let tab = browser
            .new_tab()
            .map_err(|e| CrawlError::Browser(format!("Failed to create tab: {}", e)))?;

        info!(headless = options.headless, "Browser session started");
        Ok(Self {
            browser: Some(browser),
            tab,
        })
    }
}

impl PageProvider for ChromePage {
    fn navigate(&mut self, url: &str) -> Result<(), CrawlError> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map(|_| ())
            .map_err(|e| CrawlError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    fn wait_for_element_id(&mut self, id: &str, timeout: Duration) -> Result<(), CrawlError> {
        let selector = id_selector(id);
        self.tab
            .wait_for_element_with_custom_timeout(&selector, timeout)
            .map(|_| ())
            .map_err(|e| {
                debug!("Wait for #{} failed: {}", id, e);
                CrawlError::Timeout {
                    id: id.to_string(),
                    timeout,
                }
            })
    }

    fn current_markup(&mut self) -> Result<String, CrawlError> {
        self.tab
            .get_content()
            .map_err(|e| CrawlError::Markup(e.to_string()))
    }

    fn quit(&mut self) {
        if let Err(e) = self.tab.close(false) {
            warn!("Failed to close tab: {}", e);
        }
        if self.browser.take().is_some() {
            info!("Browser session closed");
        }
    }
}

/// CSS attribute selector matching an element whose id is exactly `id`
///
/// The id is written as a quoted CSS string, so quotes, backslashes and
/// control characters are escaped.
fn id_selector(id: &str) -> String {
    let mut selector = String::with_capacity(id.len() + 8);
    selector.push_str("[id=\"");
    for c in id.chars() {
        match c {
            '"' | '\\' => {
                selector.push('\\');
                selector.push(c);
            }
            c if c.is_control() => selector.push_str(&format!("\\{:x} ", c as u32)),
            c => selector.push(c),
        }
    }
    selector.push_str("\"]");
    selector
}
