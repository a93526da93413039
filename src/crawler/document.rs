//! DOM queries over rendered page markup
//!
//! A narrow wrapper around `scraper::Html` exposing only what the crawler
//! needs: lookup by id, lookup by class, anchors in document order, and text
//! extraction.

use scraper::{ElementRef, Html};

/// Elements whose text is never part of the readable page
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed HTML document
pub struct Document {
    html: Html,
}

/// An anchor with an `href`, as found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute value
    pub href: String,

    /// Visible text, each text node trimmed and concatenated
    pub text: String,
}

impl Document {
    /// Parse a full HTML document
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.root_element().descendants().filter_map(ElementRef::wrap)
    }

    /// First `tag` element whose id is `id`
    pub fn find_by_id(&self, tag: &str, id: &str) -> Option<ElementRef<'_>> {
        self.elements()
            .find(|el| el.value().name() == tag && el.value().id() == Some(id))
    }

    /// First `tag` element carrying `class` among its classes
    pub fn find_by_class(&self, tag: &str, class: &str) -> Option<ElementRef<'_>> {
        self.elements()
            .find(|el| el.value().name() == tag && el.value().classes().any(|c| c == class))
    }
}

/// All `<a href>` descendants of `element`, in document order
pub fn anchors(element: ElementRef<'_>) -> Vec<Anchor> {
    element
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .filter_map(|el| {
            let href = el.value().attr("href")?;
            Some(Anchor {
                href: href.to_string(),
                text: visible_text(el).map(str::trim).collect(),
            })
        })
        .collect()
}

/// Text of `element` with one line per text run
///
/// Each descendant text node is trimmed; empty ones are dropped and the rest
/// joined with `\n`.
pub fn text_lines(element: ElementRef<'_>) -> String {
    visible_text(element)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn visible_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    element.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TEXT_TAGS.contains(&el.name()))
        });
        if hidden { None } else { Some(&**text) }
    })
}
