//! HTML parsing and visible-text extraction.
//!
//! This module provides the [`Document`] type, a thin wrapper over
//! `scraper::Html` that yields the plain text the metrics are computed on.
//!
//! # Example
//!
//! ```rust
//! use readscore_core::Document;
//!
//! let doc = Document::parse("<html><body><p>Easy text here.</p></body></html>");
//! assert_eq!(doc.text_content(), "Easy text here.");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{ReadscoreError, Result};

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Infallible: html5ever recovers from any malformed markup.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets all visible text content from the document.
    ///
    /// Returns the concatenation of all text nodes in document order,
    /// excluding script, style, noscript and template contents. Whitespace is
    /// left exactly as the parser produced it.
    pub fn text_content(&self) -> String {
        visible_text(self.html.root_element())
    }

    /// Gets the visible text of every element matching `selector`, in
    /// document order, joined by newlines.
    ///
    /// # Errors
    ///
    /// Returns [`ReadscoreError::HtmlParseError`] if the selector is invalid
    /// and [`ReadscoreError::NoContent`] if nothing matches.
    pub fn select_text(&self, selector: &str) -> Result<String> {
        let sel =
            Selector::parse(selector).map_err(|e| ReadscoreError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        let parts: Vec<String> = self.html.select(&sel).map(visible_text).collect();

        if parts.is_empty() {
            tracing::warn!(selector, "selector matched no elements");
            return Err(ReadscoreError::NoContent);
        }

        Ok(parts.join("\n"))
    }
}

fn visible_text(root: ElementRef<'_>) -> String {
    root.descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
            });
            (!hidden).then_some(&**text)
        })
        .collect()
}
