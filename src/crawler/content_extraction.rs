//! Content extraction functionality for the crawler module

use tracing::{error, instrument, warn};

use crate::crawler::document::{Document, text_lines};
use crate::crawler::error::CrawlError;
use crate::crawler::session::PageProvider;
use crate::crawler::CrawlerConfig;

/// Lines starting with these are page navigation, not chapter text
const UI_PREFIXES: &[&str] = &["Breadcrumb", "Content navigation"];

/// Boilerplate section labels, compared lowercase
const UI_LABELS: &[&str] = &["guidance", "resources", "appendices", "updates"];

/// Line boundaries recognised when splitting text, including `\r`, form feed
/// and the Unicode line and paragraph separators
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Normalize extracted page text
///
/// # Arguments
///
/// * `text` - Raw text, one block per line
/// * `filter_ui` - Also drop navigation lines and boilerplate labels
///
/// # Returns
///
/// The trimmed, non-empty lines joined with `\n`, in their original order
pub fn clean_content(text: &str, filter_ui: bool) -> String {
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !filter_ui || !is_ui_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_ui_line(line: &str) -> bool {
    UI_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        || UI_LABELS.contains(&line.to_lowercase().as_str())
}

/// Extract the normalized body text of one chapter page
///
/// # Arguments
///
/// * `page` - The session page to drive
/// * `url` - Absolute chapter URL
/// * `config` - Supplies the content element, wait bound and filtering
///
/// # Returns
///
/// The chapter text, or an empty string if the page could not be loaded, the
/// content element never appeared, or it was missing from the markup. Failures
/// are logged with the URL and never returned.
#[instrument(skip(page, config))]
pub fn extract_chapter<P: PageProvider>(page: &mut P, url: &str, config: &CrawlerConfig) -> String {
    match try_extract_chapter(page, url, config) {
        Ok(Some(content)) => content,
        Ok(None) => {
            warn!("No content found in {}", url);
            String::new()
        }
        Err(e) => {
            error!("Error extracting {}: {}", url, e);
            String::new()
        }
    }
}

fn try_extract_chapter<P: PageProvider>(
    page: &mut P,
    url: &str,
    config: &CrawlerConfig,
) -> Result<Option<String>, CrawlError> {
    page.navigate(url)?;
    page.wait_for_element_id(&config.content_id, config.wait_timeout)?;
    let markup = page.current_markup()?;

    let document = Document::parse(&markup);
    Ok(document
        .find_by_id(&config.content_tag, &config.content_id)
        .map(|content| clean_content(&text_lines(content), config.filter_ui)))
}
