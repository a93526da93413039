//! Crawl orchestration: discovery, extraction and record assembly

use tracing::{info, instrument};
use uuid::Uuid;

use crate::crawler::content_extraction::extract_chapter;
use crate::crawler::error::CrawlError;
use crate::crawler::location::parse_location;
use crate::crawler::session::{ChromePage, PageProvider, Session};
use crate::crawler::toc::discover_links;
use crate::crawler::{ChapterMetadata, ChapterRecord, CrawlerConfig, Dataset};

/// Crawl up to `limit` chapters with an already acquired page
///
/// The page is released before returning, on every path. Links are fetched
/// one at a time in TOC order; a chapter that fails to load still produces a
/// record, with empty content.
///
/// # Arguments
///
/// * `page` - An acquired browser page; ownership passes to the crawl
/// * `config` - The crawler configuration
/// * `limit` - Maximum number of chapter records
///
/// # Returns
///
/// One record per discovered link, in discovery order
#[instrument(skip(page, config))]
pub fn crawl<P: PageProvider>(page: P, config: &CrawlerConfig, limit: usize) -> Vec<ChapterRecord> {
    let mut session = Session::new(page);

    let links = discover_links(&mut *session, config, limit);
    let mut records = Vec::with_capacity(links.len());

    for link in links {
        info!("Fetching: {} - {}", link.title, link.url);
        let content = extract_chapter(&mut *session, &link.url, config);
        let location = parse_location(&link.url);

        records.push(ChapterRecord {
            id: Uuid::new_v4(),
            content,
            metadata: ChapterMetadata {
                volume: location.volume,
                chapter: link.title,
                section: location.section,
                reference_url: link.url,
            },
        });
    }

    session.release();
    info!("Crawled {} chapters", records.len());
    records
}

/// Launch Chrome, crawl up to `limit` chapters and assemble the dataset
///
/// Failing to launch the browser is the only error; everything after that
/// degrades into empty content or an empty dataset.
pub fn crawl_website(config: &CrawlerConfig, limit: usize) -> Result<Dataset, CrawlError> {
    let page = ChromePage::launch(&config.session)?;
    let records = crawl(page, config, limit);
    Ok(Dataset::new(config.dataset.clone(), records))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::crawler::config::DEFAULT_ENTRY_URL;
    use crate::crawler::location::{UNKNOWN_SECTION, UNKNOWN_VOLUME};
    use crate::crawler::mock_page::MockPage;

    const CHAPTER_1: &str = "https://www.uscis.gov/policy-manual/volume-1-part-a-chapter-1";
    const CHAPTER_2: &str = "https://www.uscis.gov/policy-manual/volume-2-part-c-chapter-4";
    const CHAPTER_3: &str = "https://www.uscis.gov/policy-manual/volume-3-part-b-chapter-1";

    const TOC_HTML: &str = r#"
        <html><body><div class="toc-tree">
          <a href="/policy-manual/volume-1-part-a-chapter-1">Chapter 1 - Purpose</a>
          <a href="/newsroom">Newsroom</a>
          <a href="/policy-manual/volume-2-part-c-chapter-4">Chapter 4 - Documentation</a>
          <a href="/policy-manual/volume-3-part-b-chapter-1">Chapter 1 - Eligibility</a>
        </div></body></html>
    "#;

    fn chapter_html(body: &str) -> String {
        format!(
            r#"<html><body><div id="content"><p>Breadcrumb Home</p><p>{}</p></div></body></html>"#,
            body
        )
    }

    fn site() -> MockPage {
        MockPage::new()
            .with_page(DEFAULT_ENTRY_URL, TOC_HTML)
            .with_page(CHAPTER_1, &chapter_html("Purpose text"))
            .with_page(CHAPTER_2, &chapter_html("Documentation text"))
            .with_page(CHAPTER_3, &chapter_html("Eligibility text"))
    }

    #[test]
    fn test_crawl_respects_limit_and_order() {
        let page = site();
        let handle = page.clone();

        let records = crawl(page, &CrawlerConfig::default(), 2);

        assert_eq!(records.len(), 2);
        let urls: Vec<&str> = records
            .iter()
            .map(|r| r.metadata.reference_url.as_str())
            .collect();
        assert_eq!(urls, vec![CHAPTER_1, CHAPTER_2]);

        let ids: HashSet<Uuid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 2);

        assert_eq!(records[0].content, "Purpose text");
        assert_eq!(records[0].metadata.chapter, "Chapter 1 - Purpose");
        assert_eq!(records[0].metadata.volume, "Volume 1");
        assert_eq!(records[0].metadata.section, "Part A");
        assert_eq!(records[1].metadata.volume, "Volume 2");
        assert_eq!(records[1].metadata.section, "Part C");

        assert_eq!(
            handle.navigations(),
            vec![DEFAULT_ENTRY_URL.to_string(), CHAPTER_1.to_string(), CHAPTER_2.to_string()]
        );
        assert_eq!(handle.quits(), 1);
    }

    #[test]
    fn test_crawl_zero_limit_fetches_nothing() {
        let page = site();
        let handle = page.clone();

        let records = crawl(page, &CrawlerConfig::default(), 0);

        assert!(records.is_empty());
        assert!(handle.navigations().is_empty());
        assert_eq!(handle.quits(), 1);
    }

    #[test]
    fn test_timeout_keeps_record_with_metadata() {
        let page = site().with_timeout(CHAPTER_2);
        let records = crawl(page, &CrawlerConfig::default(), 3);

        assert_eq!(records.len(), 3);
        let timed_out = &records[1];
        assert_eq!(timed_out.content, "");
        assert_eq!(timed_out.metadata.reference_url, CHAPTER_2);
        assert_eq!(timed_out.metadata.chapter, "Chapter 4 - Documentation");
        assert_eq!(timed_out.metadata.volume, "Volume 2");
        assert_eq!(timed_out.metadata.section, "Part C");
        assert_eq!(records[2].content, "Eligibility text");
    }

    #[test]
    fn test_navigation_failure_continues_with_next_link() {
        let page = site().with_navigation_error(CHAPTER_1);
        let records = crawl(page, &CrawlerConfig::default(), 2);

        assert_eq!(records[0].content, "");
        assert_eq!(records[1].content, "Documentation text");
    }

    #[test]
    fn test_missing_toc_yields_empty_crawl() {
        let page = MockPage::new().with_page(DEFAULT_ENTRY_URL, "<html><body></body></html>");
        let handle = page.clone();

        assert!(crawl(page, &CrawlerConfig::default(), 2).is_empty());
        assert_eq!(handle.quits(), 1);
    }

    #[test]
    fn test_unparseable_location_uses_defaults() {
        let toc = r#"<div class="toc-tree"><a href="/policy-manual/glossary">Glossary</a></div>"#;
        let glossary = "https://www.uscis.gov/policy-manual/glossary";
        let page = MockPage::new()
            .with_page(DEFAULT_ENTRY_URL, toc)
            .with_page(glossary, &chapter_html("Terms"));

        let records = crawl(page, &CrawlerConfig::default(), 1);

        assert_eq!(records[0].metadata.volume, UNKNOWN_VOLUME);
        assert_eq!(records[0].metadata.section, UNKNOWN_SECTION);
        assert_eq!(records[0].content, "Terms");
    }
}
