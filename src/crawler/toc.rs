//! Table-of-contents discovery

use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::crawler::document::{Document, anchors};
use crate::crawler::error::CrawlError;
use crate::crawler::session::PageProvider;
use crate::crawler::{CrawlerConfig, TocLink};

/// Find up to `limit` in-scope chapter links on the TOC page
///
/// Links come back in document order with absolute URLs. A TOC page that
/// cannot be loaded, or that has no TOC container, yields no links; the
/// failure is logged rather than returned.
#[instrument(skip(page, config), fields(entry_url = %config.entry_url))]
pub fn discover_links<P: PageProvider>(
    page: &mut P,
    config: &CrawlerConfig,
    limit: usize,
) -> Vec<TocLink> {
    if limit == 0 {
        debug!("Link limit is zero, skipping TOC");
        return Vec::new();
    }

    info!("Loading TOC: {}", config.entry_url);
    let markup = match load_toc(page, &config.entry_url) {
        Ok(markup) => markup,
        Err(e) => {
            error!("Failed to load TOC {}: {}", config.entry_url, e);
            return Vec::new();
        }
    };

    let origin = match Url::parse(&config.origin) {
        Ok(origin) => origin,
        Err(e) => {
            error!("Invalid site origin {}: {}", config.origin, e);
            return Vec::new();
        }
    };

    let document = Document::parse(&markup);
    let Some(toc) = document.find_by_class(&config.toc_tag, &config.toc_class) else {
        error!("TOC not found.");
        return Vec::new();
    };

    let mut links = Vec::new();
    for anchor in anchors(toc) {
        if links.len() >= limit {
            break;
        }
        if !anchor.href.starts_with(&config.path_prefix) {
            continue;
        }
        match origin.join(&anchor.href) {
            Ok(url) => links.push(TocLink {
                title: anchor.text,
                url: url.to_string(),
            }),
            Err(e) => warn!("Skipping unresolvable link {}: {}", anchor.href, e),
        }
    }

    info!("Discovered {} chapter links", links.len());
    links
}

fn load_toc<P: PageProvider>(page: &mut P, entry_url: &str) -> Result<String, CrawlError> {
    page.navigate(entry_url)?;
    page.current_markup()
}
